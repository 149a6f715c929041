//! End-to-end generation through the real adapters.

use std::fs;
use std::path::Path;

use servicegen_adapters::{LocalFilesystem, MemoryFilesystem, SimpleRenderer, YamlParser};
use servicegen_core::{
    application::{ApplicationError, GenerateRequest, GenerateService, ReportEntry},
    domain::DomainError,
    error::ServiceGenError,
};
use tempfile::TempDir;

const META: &str = "targets:\n  - name: web\n    description: Web services\n";

const APP: &str = r#"cmd: /usr/bin/app
dir: /srv/app
target: web
description: "App"
after: network
"#;

fn local_service() -> GenerateService {
    GenerateService::new(
        Box::new(YamlParser::new()),
        Box::new(SimpleRenderer::new().unwrap()),
        Box::new(LocalFilesystem::new()),
    )
}

fn memory_service(fs: &MemoryFilesystem) -> GenerateService {
    GenerateService::new(
        Box::new(YamlParser::new()),
        Box::new(SimpleRenderer::new().unwrap()),
        Box::new(fs.clone()),
    )
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn web_app_scenario_on_disk() {
    let input = TempDir::new().unwrap();
    write(input.path(), "_meta.yaml", META);
    write(input.path(), "app.yaml", APP);

    let report = local_service()
        .generate(&GenerateRequest::new(input.path()))
        .unwrap();
    assert_eq!(report.written_count(), 2);

    let target = fs::read_to_string(input.path().join("web.target")).unwrap();
    assert!(target.contains("Description=Web services"));

    let service = fs::read_to_string(input.path().join("app.service")).unwrap();
    for line in [
        "ExecStart=/usr/bin/app",
        "WorkingDirectory=/srv/app",
        "PartOf=web.target",
        "After=network.target",
        "Description=App",
    ] {
        assert!(service.lines().any(|l| l == line), "missing {line}");
    }
}

#[test]
fn undeclared_target_leaves_target_file_only() {
    let input = TempDir::new().unwrap();
    write(input.path(), "_meta.yaml", META);
    write(input.path(), "app.yaml", &APP.replace("target: web", "target: database"));

    let err = local_service()
        .generate(&GenerateRequest::new(input.path()))
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceGenError::Document {
            source: DomainError::UndeclaredTarget { .. },
            ..
        }
    ));
    assert!(input.path().join("web.target").exists());
    assert!(!input.path().join("app.service").exists());
}

#[test]
fn output_dir_override_collects_every_file() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let out_dir = output.path().join("units");
    write(input.path(), "_meta.yaml", META);
    write(input.path(), "app.yaml", APP);
    write(input.path(), "legacy.service", "[Service]\nExecStart=/bin/true\n");

    local_service()
        .generate(&GenerateRequest::new(input.path()).with_output_dir(Some(out_dir.clone())))
        .unwrap();

    let mut names: Vec<_> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, ["app.service", "legacy.service", "web.target"]);
    assert_eq!(
        fs::read(out_dir.join("legacy.service")).unwrap(),
        b"[Service]\nExecStart=/bin/true\n"
    );
    assert!(!input.path().join("app.service").exists());
}

#[test]
fn second_run_is_byte_identical() {
    let input = TempDir::new().unwrap();
    write(input.path(), "_meta.yaml", META);
    write(input.path(), "app.yaml", APP);
    let request = GenerateRequest::new(input.path());

    local_service().generate(&request).unwrap();
    let first_target = fs::read(input.path().join("web.target")).unwrap();
    let first_service = fs::read(input.path().join("app.service")).unwrap();

    // The generated app.service is now an input too; it is copied onto itself.
    local_service().generate(&request).unwrap();
    assert_eq!(fs::read(input.path().join("web.target")).unwrap(), first_target);
    assert_eq!(fs::read(input.path().join("app.service")).unwrap(), first_service);
}

#[test]
fn subdirectories_are_ignored() {
    let input = TempDir::new().unwrap();
    write(input.path(), "_meta.yaml", META);
    fs::create_dir(input.path().join("drafts")).unwrap();
    write(&input.path().join("drafts"), "bad.yaml", "cmd: [");

    let report = local_service()
        .generate(&GenerateRequest::new(input.path()))
        .unwrap();
    assert_eq!(report.entries.len(), 1);
}

#[test]
fn disabled_service_produces_nothing_and_run_continues() {
    let fs = MemoryFilesystem::new()
        .with_file("in/_meta.yaml", META)
        .with_file("in/a_broken.yaml", "cmd: x\nbroken: true\n")
        .with_file("in/app.yaml", APP);

    let report = memory_service(&fs)
        .generate(&GenerateRequest::new("in"))
        .unwrap();

    assert!(fs.read_string("in/a_broken.service").is_none());
    assert!(fs.read_string("in/app.service").is_some());
    assert!(report.entries.contains(&ReportEntry::Skipped {
        source: "in/a_broken.yaml".into()
    }));
}

#[test]
fn period_in_identifier_aborts_before_rendering() {
    let fs = MemoryFilesystem::new()
        .with_file("in/_meta.yaml", META)
        .with_file("in/app.yaml", APP.replace("after: network", "after: network.target"));

    let err = memory_service(&fs)
        .generate(&GenerateRequest::new("in"))
        .unwrap_err();

    assert!(err.to_string().contains("cannot contain a period"));
    assert!(fs.read_string("in/app.service").is_none());
}

#[test]
fn every_target_entry_gets_a_file() {
    let meta = "targets:\n  - name: web\n    description: Web\n  - name: batch\n    description: Batch\n  - name: db\n    description: Databases\n";
    let fs = MemoryFilesystem::new().with_file("in/_meta.yaml", meta);

    let report = memory_service(&fs)
        .generate(&GenerateRequest::new("in"))
        .unwrap();

    assert_eq!(report.written_count(), 3);
    for (name, description) in [("web", "Web"), ("batch", "Batch"), ("db", "Databases")] {
        let text = fs.read_string(format!("in/{name}.target")).unwrap();
        assert!(text.contains(&format!("Description={description}\n")));
    }
}

#[test]
fn missing_required_field_is_reported_with_file() {
    let fs = MemoryFilesystem::new()
        .with_file("in/_meta.yaml", META)
        .with_file("in/app.yaml", "cmd: /bin/app\ntarget: web\n");

    let err = memory_service(&fs)
        .generate(&GenerateRequest::new("in"))
        .unwrap_err();

    match err {
        ServiceGenError::Document { path, source } => {
            assert_eq!(path, Path::new("in/app.yaml"));
            assert_eq!(source, DomainError::MissingRequiredField { field: "dir" });
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_yaml_input_is_a_parse_error() {
    let fs = MemoryFilesystem::new()
        .with_file("in/_meta.yaml", META)
        .with_file("in/notes.txt", "just: [some notes");

    let err = memory_service(&fs)
        .generate(&GenerateRequest::new("in"))
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceGenError::Application(ApplicationError::ParseFailed { .. })
    ));
}

#[test]
fn malformed_metadata_writes_nothing() {
    let fs = MemoryFilesystem::new()
        .with_file("in/_meta.yaml", "targets: [")
        .with_file("in/app.yaml", APP);

    assert!(memory_service(&fs)
        .generate(&GenerateRequest::new("in"))
        .is_err());
    assert_eq!(fs.list_all().len(), 2);
}

#[test]
fn stale_target_in_input_does_not_overwrite_fresh_output() {
    let fs = MemoryFilesystem::new()
        .with_file("in/_meta.yaml", META)
        .with_file("in/web.target", "[Unit]\nDescription=Old\n");

    memory_service(&fs)
        .generate(&GenerateRequest::new("in").with_output_dir(Some("out".into())))
        .unwrap();

    let text = fs.read_string("out/web.target").unwrap();
    assert!(text.contains("Description=Web services"));
}
