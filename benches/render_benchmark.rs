//! Performance benchmarks for dashboard rendering
//!
//! Measures a full dashboard frame for different page sizes, and cell
//! formatting on its own.
//! Run with: cargo bench

use abd_admin::app::InputMode;
use abd_admin::models::{ResourceKind, Tariff};
use abd_admin::resource::view::format_cell;
use abd_admin::resource::TableView;
use abd_admin::ui::dashboard::{render_dashboard, DashboardProps};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::json;

/// A tariff table holding `rows` rows.
fn tariff_view(rows: usize) -> TableView {
    let mut view = TableView::empty::<Tariff>();
    for i in 0..rows {
        let id = i as i64 + 1;
        view.rows.push(vec![
            id.to_string(),
            format!("Tariff {}", id),
            "Monthly access with saved filters and instant alerts".to_string(),
            "30".to_string(),
            format_cell("price", &json!(990 * id)),
            "5".to_string(),
        ]);
        view.row_ids.push(id);
    }
    view.page = 1;
    view.pages = 10;
    view.total = rows as u64 * 10;
    view
}

fn bench_dashboard_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_frame");
    let mode = InputMode::Normal;

    for rows in [10, 20, 50, 100].iter() {
        let view = tariff_view(*rows);
        let mut terminal = Terminal::new(TestBackend::new(160, 60)).unwrap();
        group.throughput(Throughput::Elements(*rows as u64));

        group.bench_with_input(BenchmarkId::from_parameter(format!("{}_rows", rows)), &view, |b, view| {
            b.iter(|| {
                let props = DashboardProps {
                    view,
                    active: ResourceKind::Tariffs,
                    selected: rows / 2,
                    input_mode: &mode,
                    dialog: None,
                    notice: None,
                    login: "admin",
                    language: "en",
                    tick: 0,
                };
                terminal
                    .draw(|f| render_dashboard(f, black_box(&props)))
                    .unwrap();
            });
        });
    }

    group.finish();
}

fn bench_format_cell(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_cell");
    let values = [
        ("price_rub", json!(1_234_567)),
        ("create_dttm", json!("2024-03-01T10:15:42.123456")),
        ("successfully", json!(true)),
        ("url", json!("https://cars.example/listing/123456")),
    ];

    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("mixed_cells", |b| {
        b.iter(|| {
            for (field, value) in &values {
                black_box(format_cell(black_box(field), black_box(value)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dashboard_frame, bench_format_cell);

criterion_main!(benches);
