use super::*;
use tempfile::tempdir;

fn buffer() -> (Arc<Mutex<Vec<u8>>>, SharedWriter) {
    let buf = Arc::new(Mutex::new(Vec::<u8>::new()));
    let out: SharedWriter = buf.clone();
    (buf, out)
}

fn clipboard(mode: FallbackMode, helpers: Vec<HelperCommand>) -> (LegacyClipboard, Arc<Mutex<Vec<u8>>>) {
    let (buf, out) = buffer();
    let legacy = LegacyClipboard::new(mode)
        .with_helpers(helpers)
        .with_helper_timeout(Duration::from_secs(5))
        .with_osc52_output(out, Osc52Env::default());
    (legacy, buf)
}

fn missing_helper() -> HelperCommand {
    HelperCommand::new("promptboard-no-such-helper", Vec::<String>::new())
}

#[cfg(unix)]
#[test]
fn helper_receives_text() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("clip.txt");
    let helper = HelperCommand::new("sh", ["-c".to_string(), format!("cat > '{}'", target.display())]);
    let (legacy, osc) = clipboard(FallbackMode::Command, vec![helper]);

    assert_eq!(legacy.copy("alpha"), CopyAttempt::Copied);
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "alpha");
    assert!(osc.lock().unwrap().is_empty());
}

#[cfg(unix)]
#[test]
fn helper_failure_is_rejected() {
    let helper = HelperCommand::new("sh", ["-c", "cat >/dev/null; exit 3"]);
    let (legacy, _) = clipboard(FallbackMode::Command, vec![helper]);

    assert!(matches!(
        legacy.copy("alpha"),
        CopyAttempt::Failed(CopyError::Rejected(_))
    ));
}

#[cfg(unix)]
#[test]
fn missing_helpers_are_skipped() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("clip.txt");
    let helper = HelperCommand::new("sh", ["-c".to_string(), format!("cat > '{}'", target.display())]);
    let (legacy, _) = clipboard(FallbackMode::Command, vec![missing_helper(), helper]);

    assert!(legacy.copy("beta").is_copied());
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "beta");
}

#[test]
fn command_mode_without_helpers_is_unavailable() {
    let (legacy, osc) = clipboard(FallbackMode::Command, vec![missing_helper()]);
    assert_eq!(
        legacy.copy("alpha"),
        CopyAttempt::Failed(CopyError::Unavailable)
    );
    assert!(osc.lock().unwrap().is_empty());
}

#[test]
fn auto_mode_falls_through_to_osc52() {
    let (legacy, osc) = clipboard(FallbackMode::Auto, vec![missing_helper()]);
    assert_eq!(legacy.copy("alpha"), CopyAttempt::Copied);
    assert_eq!(&*osc.lock().unwrap(), b"\x1b]52;c;YWxwaGE=\x07");
}

#[test]
fn osc52_mode_rejects_oversized_text() {
    let (legacy, osc) = clipboard(FallbackMode::Osc52, Vec::new());
    let big = "x".repeat(osc52::OSC52_MAX_BYTES + 1);
    assert_eq!(
        legacy.copy(&big),
        CopyAttempt::Failed(CopyError::TooLarge(osc52::OSC52_MAX_BYTES + 1))
    );
    assert!(osc.lock().unwrap().is_empty());
}

#[test]
fn none_mode_never_copies() {
    let (legacy, osc) = clipboard(FallbackMode::None, Vec::new());
    assert_eq!(
        legacy.copy("alpha"),
        CopyAttempt::Failed(CopyError::Unavailable)
    );
    assert!(osc.lock().unwrap().is_empty());
}

#[cfg(unix)]
#[test]
fn holder_is_released_when_helper_hangs() {
    let helper = HelperCommand::new("sh", ["-c", "exec sleep 30"]);
    let mut holder = ClipboardHolder::create(&helper).unwrap();
    let pid = holder.child.id().to_string();

    let err = holder.commit(Duration::from_millis(50)).unwrap_err();
    assert!(matches!(err, CopyError::Io(_)));
    drop(holder);

    let alive = std::process::Command::new("kill")
        .args(["-0", &pid])
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(!alive.success());
}
