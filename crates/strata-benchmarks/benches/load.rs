//! Parsing and end-to-end load benchmarks
//!
//! Parses equivalent documents in every bundled format, then loads a
//! directory of files from disk through the full resolve/dispatch/merge path.

use camino::Utf8PathBuf;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strata_benchmarks::criterion_config;
use strata_config::{ConfigLoader, FormatParser, IniParser, JsonParser, TomlParser, XmlParser, YamlParser};
use tempfile::TempDir;

/// Benchmark parsing the same settings in each format
fn bench_format_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_parsing");
    group.measurement_time(std::time::Duration::from_secs(5));

    for section_count in [10, 100].iter() {
        group.throughput(Throughput::Elements(*section_count as u64));

        let documents: [(&str, Box<dyn FormatParser>, String); 5] = [
            ("ini", Box::new(IniParser), create_ini_content(*section_count)),
            ("json", Box::new(JsonParser), create_json_content(*section_count)),
            ("toml", Box::new(TomlParser), create_toml_content(*section_count)),
            ("xml", Box::new(XmlParser), create_xml_content(*section_count)),
            ("yaml", Box::new(YamlParser), create_yaml_content(*section_count)),
        ];

        for (name, parser, content) in documents.iter() {
            group.bench_with_input(
                BenchmarkId::new(*name, section_count),
                content,
                |b, content| {
                    b.iter(|| black_box(parser.parse_str(content, "bench").unwrap()));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark loading a directory of files end to end
fn bench_directory_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("directory_load");
    group.measurement_time(std::time::Duration::from_secs(5));

    let loader = ConfigLoader::default();

    for file_count in [4, 16, 64].iter() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();

        for i in 0..*file_count {
            let (extension, content) = match i % 4 {
                0 => ("ini", create_ini_content(10)),
                1 => ("json", create_json_content(10)),
                2 => ("toml", create_toml_content(10)),
                _ => ("yaml", create_yaml_content(10)),
            };
            std::fs::write(root.join(format!("{:03}.{}", i, extension)), content).unwrap();
        }

        group.throughput(Throughput::Elements(*file_count as u64));
        group.bench_with_input(BenchmarkId::new("files", file_count), &root, |b, root| {
            b.iter(|| black_box(loader.load(root.clone()).unwrap()));
        });
    }

    group.finish();
}

// Helper functions for benchmark setup

fn create_ini_content(section_count: usize) -> String {
    let mut content = String::new();
    for i in 0..section_count {
        content.push_str(&format!(
            "[service_{i}]\nhost = host-{i}.local\nport = {port}\nenabled = on\ntags[] = a\ntags[] = b\n\n",
            i = i,
            port = 8000 + i
        ));
    }
    content
}

fn create_json_content(section_count: usize) -> String {
    let sections: Vec<String> = (0..section_count)
        .map(|i| {
            format!(
                r#""service_{i}": {{"host": "host-{i}.local", "port": {port}, "enabled": true, "tags": ["a", "b"]}}"#,
                i = i,
                port = 8000 + i
            )
        })
        .collect();
    format!("{{{}}}", sections.join(", "))
}

fn create_toml_content(section_count: usize) -> String {
    let mut content = String::new();
    for i in 0..section_count {
        content.push_str(&format!(
            "[service_{i}]\nhost = \"host-{i}.local\"\nport = {port}\nenabled = true\ntags = [\"a\", \"b\"]\n\n",
            i = i,
            port = 8000 + i
        ));
    }
    content
}

fn create_xml_content(section_count: usize) -> String {
    let mut content = String::from("<config>\n");
    for i in 0..section_count {
        content.push_str(&format!(
            "  <service_{i} enabled=\"true\">\n    <host>host-{i}.local</host>\n    <port>{port}</port>\n    <tags>a</tags>\n    <tags>b</tags>\n  </service_{i}>\n",
            i = i,
            port = 8000 + i
        ));
    }
    content.push_str("</config>\n");
    content
}

fn create_yaml_content(section_count: usize) -> String {
    let mut content = String::new();
    for i in 0..section_count {
        content.push_str(&format!(
            "service_{i}:\n  host: host-{i}.local\n  port: {port}\n  enabled: true\n  tags:\n    - a\n    - b\n",
            i = i,
            port = 8000 + i
        ));
    }
    content
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_format_parsing, bench_directory_load
}
criterion_main!(benches);
