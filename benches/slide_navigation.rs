// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for slide navigation and geometry passes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iced_carousel::carousel::{CarouselConfig, Slide, SlideController, SlideDeck};
use std::time::Duration;

fn deck(n: usize) -> SlideDeck {
    SlideDeck::from_slides((0..n).map(|i| Slide::from_image(format!("{i}.jpg"))).collect())
}

fn bench_go_to(c: &mut Criterion) {
    let mut controller = SlideController::new(deck(100), CarouselConfig::default());
    controller.update(800.0).expect("geometry pass");

    c.bench_function("go_to_alternating", |b| {
        let mut target = 0;
        b.iter(|| {
            target = (target + 37) % controller.slide_count();
            black_box(controller.go_to(target, Some(Duration::ZERO)).unwrap());
        });
    });
}

fn bench_update(c: &mut Criterion) {
    let mut config = CarouselConfig::default();
    config.use_thumbs = true;
    config.images_per_slide = 3.0;
    let mut controller = SlideController::new(deck(100), config);

    c.bench_function("update_with_thumbs", |b| {
        let mut width = 600.0;
        b.iter(|| {
            width = if width > 1200.0 { 600.0 } else { width + 1.0 };
            controller.update(black_box(width)).unwrap();
        });
    });
}

fn bench_animation_ticks(c: &mut Criterion) {
    let mut controller = SlideController::new(deck(100), CarouselConfig::default());
    controller.update(800.0).expect("geometry pass");

    c.bench_function("animation_tick", |b| {
        b.iter(|| {
            controller.go_to(1, None).unwrap();
            while controller.tick(Duration::from_millis(16)) {}
            controller.go_to(0, Some(Duration::ZERO)).unwrap();
        });
    });
}

criterion_group!(benches, bench_go_to, bench_update, bench_animation_ticks);
criterion_main!(benches);
