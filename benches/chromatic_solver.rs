use chromatic::{algorithm::*, generate::*, graph::{undirected::*, *}};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

criterion_group!(benches, matrix_backed, adjacent_list_backed);
criterion_main!(benches);

fn matrix_backed(c: &mut Criterion) {
    cases::<MatrixBackedGraph>(c, "matrix_backed");
}

fn adjacent_list_backed(c: &mut Criterion) {
    cases::<AdjacentListGraph>(c, "adjacent_list_backed");
}

fn cases<G>(c: &mut Criterion, prefix: &str)
where
    G: GrowableGraph + QueryableGraph,
{
    c.bench_function(&(prefix.to_string() + "/generate"), |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            let g = G::random(black_box(64), &mut rng).unwrap();
            black_box(g.edge_size());
        })
    });

    let g = cycle::<G>(12);
    c.bench_function(&(prefix.to_string() + "/solve/cycle"), |b| {
        b.iter(|| black_box(g.chromatic_number()))
    });

    let g = complete::<G>(8);
    c.bench_function(&(prefix.to_string() + "/solve/complete"), |b| {
        b.iter(|| black_box(g.chromatic_number()))
    });

    let mut rng = StdRng::seed_from_u64(7);
    let g = G::random(10, &mut rng).unwrap();
    c.bench_function(&(prefix.to_string() + "/solve/random"), |b| {
        b.iter(|| black_box(g.chromatic_number()))
    });
}

fn cycle<G: GrowableGraph>(n: usize) -> G {
    let mut g = G::new();
    let vertices: Vec<_> = (0..n).map(|_| g.add_vertex()).collect();
    for i in 0..n {
        g.add_edge(vertices[i], vertices[(i + 1) % n]);
    }
    g
}

fn complete<G: GrowableGraph>(n: usize) -> G {
    let mut g = G::new();
    let vertices: Vec<_> = (0..n).map(|_| g.add_vertex()).collect();
    for i in 0..n {
        for j in (i + 1)..n {
            g.add_edge(vertices[i], vertices[j]);
        }
    }
    g
}
