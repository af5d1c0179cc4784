use argschema::{ArgumentParser, OptionSpec, Schema};
use criterion::{criterion_group, criterion_main, Criterion};

macro_rules! create_schema {
    () => {{
        Schema {
            options: vec![
                OptionSpec {
                    name: "-c",
                    alias: Some("--command"),
                    description: "Command of",
                    requires_value: true,
                },
                OptionSpec {
                    name: "-d",
                    description: "Not wait",
                    ..Default::default()
                },
                OptionSpec {
                    name: "-p",
                    alias: Some("--path"),
                    description: "Path of",
                    requires_value: true,
                },
                OptionSpec {
                    name: "-trace",
                    description: "Trace request",
                    ..Default::default()
                },
            ],
            examples: vec!["prog -c build -p /tmp -trace"],
        }
    }};
}

pub fn build_simple(c: &mut Criterion) {
    c.bench_function("build_simple", |b| b.iter(|| ArgumentParser::new(create_schema!()).is_ok()));
}

pub fn generate_help(c: &mut Criterion) {
    let parser = ArgumentParser::new(create_schema!()).unwrap();
    c.bench_function("generate_help", |b| b.iter(|| parser.generate_help()));
}

pub fn parse_simple_with_flag(c: &mut Criterion) {
    let parser = ArgumentParser::new(create_schema!()).unwrap();
    c.bench_function("parse_simple_with_flag", |b| {
        b.iter(|| parser.process_arguments_with(vec!["myprog", "-d"], &mut String::new()).is_ok())
    });
}

pub fn parse_simple_with_opt(c: &mut Criterion) {
    let parser = ArgumentParser::new(create_schema!()).unwrap();
    c.bench_function("parse_simple_with_opt", |b| {
        b.iter(|| parser.process_arguments_with(vec!["myprog", "--command", "build"], &mut String::new()).is_ok())
    });
}

pub fn parse_simple_with_complex(c: &mut Criterion) {
    let parser = ArgumentParser::new(create_schema!()).unwrap();
    c.bench_function("parse_simple_with_complex", |b| {
        b.iter(|| {
            parser
                .process_arguments_with(vec!["myprog", "-c", "build", "-p", "/tmp", "stray", "-d", "-trace"], &mut String::new())
                .is_ok()
        })
    });
}

criterion_group!(
    benches,
    parse_simple_with_complex,
    parse_simple_with_opt,
    parse_simple_with_flag,
    generate_help,
    build_simple
);

criterion_main!(benches);
