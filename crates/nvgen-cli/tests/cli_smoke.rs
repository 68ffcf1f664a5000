use std::path::PathBuf;
use std::process::Command;

fn nvgen() -> Command {
    Command::new(PathBuf::from(env!("CARGO_BIN_EXE_nvgen")))
}

#[test]
fn writes_body_and_header() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let schema = tmp.path().join("nvapi.csv");
    std::fs::write(
        &schema,
        b"# id,name,params\n0x20,GetErrorString,const char * input,char * output\n",
    )
    .expect("write schema");
    let prefix = tmp.path().join("nvidia_interface");

    let out = nvgen().arg(&schema).arg(&prefix).output().expect("run nvgen");
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));

    let header = std::fs::read_to_string(tmp.path().join("nvidia_interface_gen.h")).expect("header");
    assert!(header.contains("NVLIB_EXPORTED NV_STATUS NVIDIA_RAW_GetErrorString(const char * input, char * output);"));
    let body = std::fs::read_to_string(tmp.path().join("nvidia_interface_gen.cpp")).expect("body");
    assert!(body.contains("nvidia_query(0x20)"));
}

#[test]
fn malformed_row_exits_nonzero() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let schema = tmp.path().join("bad.csv");
    std::fs::write(&schema, b"0x21,BadRow,flag\n").expect("write schema");
    let prefix = tmp.path().join("bad");

    let out = nvgen().arg(&schema).arg(&prefix).output().expect("run nvgen");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("NVG0110"), "stderr={stderr}");
    assert!(!tmp.path().join("bad_gen.cpp").exists());
}

#[test]
fn missing_arguments_are_rejected() {
    let out = nvgen().output().expect("run nvgen");
    assert!(!out.status.success());
}
