use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use adiflog::parser::{self, AdifSink};
use adiflog::{QsoRecord, grid};

fn log_text(records: usize) -> String {
    let mut text = String::from("<ADIF_VER:5>3.1.4<PROGRAMID:7>adiflog<EOH>\r\n");
    for i in 0..records {
        text.push_str(&format!(
            "<QSO_DATE:8>20230615<TIME_ON:6>{:02}{:02}{:02}<CALL:5>K{:04}<BAND:3>20m<MODE:2>CW\
             <FREQ:6>14.050<RST_SENT:3>599<RST_RCVD:3>599<GRIDSQUARE:4>FN42<EOR>\r\n",
            i / 3600 % 24,
            i / 60 % 60,
            i % 60,
            i % 10_000,
        ));
    }
    text
}

struct Counter(usize);

impl AdifSink for Counter {
    fn qso(&mut self, _record: QsoRecord) {
        self.0 += 1;
    }
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_log");
    for n in [100usize, 1_000, 10_000] {
        let text = log_text(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| {
                let mut counter = Counter(0);
                parser::parse(text, &mut counter).expect("valid log");
                assert_eq!(counter.0, n);
            });
        });
    }
    group.finish();
}

fn bench_record_build(c: &mut Criterion) {
    c.bench_function("qso_from_fields_10k", |b| {
        b.iter(|| {
            for i in 0..10_000u32 {
                let call = format!("K{i:04}");
                let _ = QsoRecord::from_fields([
                    ("QSO_DATE", "20230615"),
                    ("TIME_ON", "1234"),
                    ("CALL", call.as_str()),
                    ("BAND", "20m"),
                    ("MODE", "CW"),
                ])
                .expect("valid record");
            }
        });
    });
}

fn bench_grid_distance(c: &mut Criterion) {
    c.bench_function("grid_distance_100k", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for _ in 0..100_000 {
                total += grid::distance("FN42", "JN58td").expect("valid locators");
            }
            total
        });
    });
}

criterion_group!(benches, bench_parse, bench_record_build, bench_grid_distance);
criterion_main!(benches);
