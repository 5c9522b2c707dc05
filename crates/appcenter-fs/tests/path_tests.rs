use appcenter_fs::NormalizedPath;

#[test]
fn test_normalize_backslashes_to_forward() {
    let path = NormalizedPath::new("C:\\agent\\ws\\app.msix");
    assert_eq!(path.as_str(), "C:/agent/ws/app.msix");
}

#[test]
fn test_join_paths() {
    let base = NormalizedPath::new("/agent/ws");
    assert_eq!(base.join("out/app.apk").as_str(), "/agent/ws/out/app.apk");
}

#[test]
fn test_join_with_trailing_slash() {
    let base = NormalizedPath::new("/agent/ws/");
    assert_eq!(base.join("app.apk").as_str(), "/agent/ws/app.apk");
}

#[test]
fn test_join_absolute_segment_replaces_base() {
    let base = NormalizedPath::new("/agent/ws");
    assert_eq!(base.join("/other/app.apk").as_str(), "/other/app.apk");
    assert_eq!(base.join("D:\\out\\app.msi").as_str(), "D:/out/app.msi");
}

#[test]
fn test_file_name() {
    let path = NormalizedPath::new("three/days/xiola.apk");
    assert_eq!(path.file_name(), Some("xiola.apk"));
}

#[test]
fn test_file_name_of_root_is_none() {
    assert_eq!(NormalizedPath::new("/").file_name(), None);
}

#[test]
fn test_extension_keeps_case() {
    let path = NormalizedPath::new("out/App.APPXSYM");
    assert_eq!(path.extension(), Some("APPXSYM"));
}

#[test]
fn test_extension_of_dotfile() {
    assert_eq!(NormalizedPath::new("out/.apk").extension(), Some("apk"));
}
