use flood_blocks_core::prelude::*;
use flood_blocks_search::prelude::*;
use flood_blocks_storage::prelude::*;
use utilities::data_sets::{corridor_world, sphere_world};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const AIR: Material = Material::new(BlockType::AIR);
const STONE: Material = Material::new(BlockType::STONE);
const GLASS: Material = Material::new(BlockType::GLASS);

fn flood_fill_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill_sphere");
    for edge_length in [32, 64, 128].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(edge_length),
            edge_length,
            |b, &edge_length| {
                b.iter_with_setup(
                    || sphere_world(edge_length, STONE, AIR),
                    |(mut world, center, _radius)| {
                        run_fill(
                            &mut world,
                            center,
                            &GLASS,
                            FillMode::Normal,
                            &BlockPermissions::allow_all(),
                            &SolidBrushResolver,
                            &mut BufferedDrawOp::default(),
                            &FillConfig::default(),
                        )
                    },
                );
            },
        );
    }
    group.finish();
}

fn find_component_corridor(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_component_corridor");
    for length in [10_000, 100_000].iter() {
        let world = corridor_world(*length, STONE);
        for max_depth in [64, 2000].iter() {
            let config = FillConfig {
                max_depth: *max_depth,
                voxel_limit: None,
            };
            group.bench_with_input(
                BenchmarkId::new(format!("max_depth_{}", max_depth), length),
                &config,
                |b, config| {
                    b.iter(|| find_component(&world, Point3i::ZERO, FillMode::Normal, config));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, flood_fill_sphere, find_component_corridor);
criterion_main!(benches);
