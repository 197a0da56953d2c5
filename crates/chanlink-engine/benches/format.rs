use chanlink_engine::{ChannelInfo, FormatOptions, Team, format_text};
use criterion::{Criterion, criterion_group, criterion_main};
use regex::Regex;

fn generate_chat_log(messages: usize) -> String {
    let mut log = String::new();
    for i in 0..messages {
        log.push_str(&format!(
            "update {i}: triage moved to ~chan-{}, see ~chan-{} for logs. \
             unrelated text with ~nosuchchannel and a bare ~ sign.\n",
            i % 100,
            (i * 7) % 100
        ));
    }
    log
}

fn bench_options() -> FormatOptions {
    FormatOptions {
        channel_names: (0..100)
            .map(|i| (format!("chan-{i}"), ChannelInfo::new(format!("Channel {i}"))))
            .collect(),
        team: Some(Team::new("myteam")),
        ..FormatOptions::default()
    }
}

fn bench_format_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    group.sample_size(10);

    let log = generate_chat_log(500);
    let options = bench_options();
    group.bench_function("format_text", |b| {
        b.iter(|| {
            let html = format_text(std::hint::black_box(&log), &options);
            std::hint::black_box(html);
        });
    });

    // Raw regex scan over the same input, as a lower bound for the scan pass.
    let pattern = Regex::new(r"\B~([A-Za-z0-9._-]+)").unwrap();
    group.bench_function("regex_scan_baseline", |b| {
        b.iter(|| {
            let matches: Vec<_> = pattern.find_iter(std::hint::black_box(&log)).collect();
            std::hint::black_box(matches);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_format_text);
criterion_main!(benches);
