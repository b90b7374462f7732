use log::LevelFilter;
use nestrace::{Converter, OnError, RenderMode, Report, TraceRecord, parse, render};
use pretty_assertions::assert_eq;
use simplelog::{Config, TestLogger};

const LOG: &str = include_str!("logs/nestest.log");

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

fn convert(mode: RenderMode, limit: Option<usize>) -> (Report, String) {
    init_logger();

    let mut out = Vec::new();
    let report = Converter::new(mode)
        .with_limit(limit)
        .run(LOG.as_bytes(), &mut out)
        .unwrap();

    (report, String::from_utf8(out).unwrap())
}

#[test]
fn nestest_truncated() {
    let (report, out) = convert(RenderMode::TruncatedWithCycle, Some(5003));
    let expected = include_str!("logs/nestest.truncated.log");

    assert_eq!(LOG.lines().count(), report.rendered);

    for (i, (expected, actual)) in expected.lines().zip(out.lines()).enumerate() {
        assert_eq!(expected, actual, "line {}", i + 1);
    }

    assert_eq!(expected, out);
}

#[test]
fn nestest_verbose() {
    let (report, out) = convert(RenderMode::VerboseSummary, None);
    let expected = include_str!("logs/nestest.verbose.log");

    assert_eq!(Report { rendered: 13, skipped: 0 }, report);
    assert_eq!(expected, out);
}

#[test]
fn nestest_limit() {
    let (report, out) = convert(RenderMode::VerboseSummary, Some(3));
    let expected: Vec<_> = include_str!("logs/nestest.verbose.log")
        .lines()
        .take(3)
        .collect();

    assert_eq!(3, report.rendered);
    assert_eq!(expected, out.lines().collect::<Vec<_>>());
}

#[test]
fn nestest_records() {
    let records: Vec<TraceRecord> = LOG.lines().map(|l| parse(l).unwrap()).collect();

    assert_eq!(0xC000, records[0].program_counter);
    assert_eq!(0x4C, records[0].opcode);
    assert_eq!("JMP", records[0].mnemonic);
    assert_eq!(0x24, records[0].status_flags);
    assert_eq!(0xFD, records[0].stack_pointer);
    assert_eq!(7, records[0].cycle);

    let cycles: Vec<_> = records.iter().map(|r| r.cycle).collect();
    assert!(cycles.windows(2).all(|w| w[0] < w[1]));

    for record in &records {
        assert_eq!(
            render(record, RenderMode::VerboseSummary),
            render(record, RenderMode::VerboseSummary)
        );
    }
}

#[test]
fn nestest_with_damaged_line() {
    init_logger();

    let damaged: String = LOG
        .lines()
        .enumerate()
        .map(|(i, l)| if i == 5 { l.replace("P:26", "P:") } else { l.to_owned() })
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = Vec::new();
    let report = Converter::new(RenderMode::VerboseSummary)
        .with_on_error(OnError::Skip)
        .run(damaged.as_bytes(), &mut out)
        .unwrap();

    assert_eq!(Report { rendered: 12, skipped: 1 }, report);

    let out = String::from_utf8(out).unwrap();
    let expected: Vec<_> = include_str!("logs/nestest.verbose.log")
        .lines()
        .enumerate()
        .filter(|(i, _)| *i != 5)
        .map(|(_, l)| l)
        .collect();

    assert_eq!(expected, out.lines().collect::<Vec<_>>());
}
