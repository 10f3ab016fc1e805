use criterion::{criterion_group, criterion_main, Criterion};
use sajs::lexer::{Lexer, State};
use sajs::writer::Writer;

fn make_large(json: &str) -> String {
    let mut large = String::from("{");
    for i in 0..10000 {
        if large.len() > 1 {
            large.push(',');
        }
        large.push_str(&format!(r#""{}":"#, i));
        large.push_str(json);
    }
    large.push('}');
    large
}

fn lex(json_bytes: &[u8]) {
    let mut stack = vec![State::default(); 256];
    let mut lexer = Lexer::new(&mut stack).unwrap();
    for &b in json_bytes {
        lexer.read_byte(Some(b));
    }
    lexer.read_byte(None);
}

fn lex_and_rewrite(json_bytes: &[u8]) {
    use sajs::writer::TextPrefix;

    let mut stack = vec![State::default(); 256];
    let mut lexer = Lexer::new(&mut stack).unwrap();
    let mut writer = Writer::new();
    let mut out = Vec::new();
    for &b in json_bytes {
        let r = lexer.read_byte(Some(b));
        let text = writer.write_result(r.event, lexer.last_bytes());
        match text.prefix {
            TextPrefix::MemberColon => out.push(b':'),
            TextPrefix::MemberComma | TextPrefix::ArrayComma => out.push(b','),
            _ => {}
        }
        out.extend_from_slice(text.bytes);
    }
}

fn sajs_benchmark(c: &mut Criterion) {
    let json = r#"{"name": "Elvis", "age": 42, "alive": false, "nested": [1, 2, 3.5e10, "x"]}"#;
    let json_bytes = json.as_bytes();

    let json_large = make_large(json);
    let json_large_bytes = json_large.as_bytes();

    c.bench_function("lex", |b| b.iter(|| lex(json_bytes)));
    c.bench_function("lex_large", |b| b.iter(|| lex(json_large_bytes)));
    c.bench_function("lex_and_rewrite", |b| b.iter(|| lex_and_rewrite(json_bytes)));
    c.bench_function("lex_and_rewrite_large", |b| {
        b.iter(|| lex_and_rewrite(json_large_bytes))
    });

    c.bench_function("serde", |b| {
        b.iter(|| {
            let _: serde_json::Value = serde_json::from_str(json).unwrap();
        })
    });
    c.bench_function("serde_large", |b| {
        b.iter(|| {
            let _: serde_json::Value = serde_json::from_str(&json_large).unwrap();
        })
    });
}

criterion_group!(benches, sajs_benchmark);
criterion_main!(benches);
