//! Benchmark suite for Glotter.
//!
//! This module provides performance benchmarks for:
//! - Project naming (every naming scheme)
//! - Source categorization (directory walk + template rendering)
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Save baseline for comparison
//! cargo bench -- --save-baseline main
//!
//! # Compare against baseline
//! cargo bench -- --baseline main
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glotter::{categorize_sources, AcronymScheme, Nameable, NamingScheme, Project};
use indexmap::IndexMap;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Naming Benchmarks
// ============================================================================

/// Benchmark rendering one project under every naming scheme.
fn bench_project_naming(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_naming");

    let project = Project::new(["file", "input", "output", "io", "xml"])
        .expect("valid project")
        .with_acronyms(["io", "xml"])
        .with_acronym_scheme(AcronymScheme::TwoLetterLimit);

    for scheme in NamingScheme::all() {
        group.bench_with_input(
            BenchmarkId::new("name_by_scheme", scheme),
            scheme,
            |b, scheme| b.iter(|| black_box(project.name_by_scheme(black_box(*scheme)))),
        );
    }

    group.bench_function("display_name", |b| {
        b.iter(|| black_box(project.display_name()))
    });

    group.finish();
}

// ============================================================================
// Categorization Benchmarks
// ============================================================================

/// Benchmark categorizing trees with a growing number of languages.
fn bench_categorization(c: &mut Criterion) {
    let mut group = c.benchmark_group("categorization");
    group.sample_size(20);

    let projects = create_projects(20);

    for languages in [5, 20, 50] {
        let temp_dir = create_source_tree(languages, &projects);
        let root = temp_dir.path().to_path_buf();

        group.throughput(Throughput::Elements((languages * projects.len()) as u64));
        group.bench_with_input(
            BenchmarkId::new("categorize_sources", languages),
            &root,
            |b, root| b.iter(|| black_box(categorize_sources(black_box(root), &projects))),
        );
    }

    group.finish();
}

// ============================================================================
// Helper Functions
// ============================================================================

fn create_projects(count: usize) -> IndexMap<String, Project> {
    (0..count)
        .map(|i| {
            let project = Project::new(["project".to_string(), format!("n{}", i), "io".into()])
                .expect("valid project")
                .with_acronyms(["io"]);
            (format!("project{}", i), project)
        })
        .collect()
}

/// Create a tree with one testable directory per language and one source
/// per project in each.
fn create_source_tree(languages: usize, projects: &IndexMap<String, Project>) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    for i in 0..languages {
        let dir = temp_dir.path().join(format!("lang-{}", i));
        fs::create_dir_all(&dir).expect("Failed to create language dir");
        fs::write(
            dir.join("testinfo.yml"),
            format!(
                "folder:\n  extension: \".l{i}\"\n  naming: \"hyphen\"\n\ncontainer:\n  image: \"lang{i}\"\n  tag: \"latest\"\n  cmd: \"run {{{{ source.name }}}}{{{{ source.extension }}}}\"\n"
            ),
        )
        .expect("Failed to write testinfo.yml");

        for project in projects.values() {
            fs::write(
                dir.join(format!("{}.l{}", project.name_by_scheme(NamingScheme::Hyphen), i)),
                "",
            )
            .expect("Failed to write source");
        }
    }

    temp_dir
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(naming_benches, bench_project_naming);

criterion_group!(categorization_benches, bench_categorization);

criterion_main!(naming_benches, categorization_benches);
