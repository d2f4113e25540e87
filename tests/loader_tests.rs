mod common;
use common::{dt, temp_path, write_sample_json};
use shiftchart::errors::AppError;
use shiftchart::loader::{load_records, parse_csv, parse_json};
use std::fs;
use std::path::Path;

#[test]
fn test_load_json_file() {
    let path = write_sample_json("loader_json");
    let records = load_records(Path::new(&path)).expect("load");

    assert_eq!(records.len(), 5);
    assert_eq!(records[0].category.code, "0001");
    assert_eq!(records[0].category.name, "Ophthalmology");
    assert_eq!(records[0].worker, "w1");
    assert_eq!(records[0].range.start, dt("2022-04-25 08:00"));
    // reversed/empty ranges are kept for the grouper to discard
    assert!(!records[4].range.is_valid());
}

#[test]
fn test_parse_csv_trims_fields() {
    let data = "code,name,worker,start,end\n\
                0001, Ophthalmology ,w1,2022-04-25 08:00,2022-04-25 10:00\n\
                0002,ENT,w2, 2022-04-26 09:00 ,2022-04-26 11:30\n";

    let records = parse_csv(data.as_bytes()).expect("csv");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].category.name, "Ophthalmology");
    assert_eq!(records[1].range.end, dt("2022-04-26 11:30"));
}

#[test]
fn test_load_csv_file() {
    let path = temp_path("loader_csv", "csv");
    fs::write(
        &path,
        "code,name,worker,start,end\n0001,Eye,w1,2022-04-25 08:00,2022-04-25 10:00\n",
    )
    .expect("write csv");

    let records = load_records(Path::new(&path)).expect("load");
    assert_eq!(records.len(), 1);
}

#[test]
fn test_bad_timestamp_is_reported() {
    let data = r#"[{ "category": {"code": "0001"}, "start": "25/04/2022 08:00", "end": "2022-04-25 10:00" }]"#;
    assert!(matches!(parse_json(data), Err(AppError::InvalidDateTime(_))));
}

#[test]
fn test_unknown_extension_is_rejected() {
    let path = temp_path("loader_txt", "txt");
    fs::write(&path, "whatever").expect("write");
    assert!(matches!(
        load_records(Path::new(&path)),
        Err(AppError::InvalidInputFormat(_))
    ));
}
