//! Performance benchmarks for full-screen rendering
//!
//! Renders every view into a TestBackend at a few terminal sizes.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::{backend::TestBackend, Terminal};
use study_monk::app::App;
use study_monk::assets::AssetCatalog;
use study_monk::config::AppConfig;
use study_monk::models::catalog;

const SIZES: [(u16, u16); 3] = [(60, 24), (100, 30), (160, 50)];

fn app() -> App {
    App::with_config_and_assets(AppConfig::default(), AssetCatalog::default())
}

/// One app per view, labelled
fn apps_by_view() -> Vec<(&'static str, App)> {
    let home = app();

    let mut loading = app();
    loading.controller.submit_search("Bio 101 Exam in 12 hours");

    let mut results = app();
    if let Some(request) = results.controller.submit_search("Bio 101 Exam in 12 hours") {
        results.controller.complete_search(&request);
    }

    let mut blog_list = app();
    blog_list.controller.open_blog();

    let mut blog_post = app();
    blog_post.controller.open_post(&catalog()[0]);

    let mut modal = app();
    modal.controller.open_modal();

    vec![
        ("home", home),
        ("loading", loading),
        ("results", results),
        ("blog_list", blog_list),
        ("blog_post", blog_post),
        ("modal", modal),
    ]
}

fn bench_render_views(c: &mut Criterion) {
    let apps = apps_by_view();

    for (width, height) in SIZES {
        let mut group = c.benchmark_group(format!("render_{}x{}", width, height));
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();

        for (name, app) in &apps {
            group.bench_with_input(BenchmarkId::from_parameter(name), app, |b, app| {
                b.iter(|| {
                    terminal
                        .draw(|f| study_monk::ui::render(f, black_box(app)))
                        .unwrap();
                });
            });
        }

        group.finish();
    }
}

/// Article layout is recomputed on every scroll key
fn bench_article_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("article_lines");
    for width in [40u16, 80, 160] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| black_box(study_monk::ui::article_lines(&catalog()[1], width)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render_views, bench_article_lines);
criterion_main!(benches);
