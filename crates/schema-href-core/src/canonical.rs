//! Dot-segment removal (RFC 3986 §5.2.4) on an already merged path.

/// Collapses `.` and `..` segments in `path`.
///
/// `""` and `"/"` come back unchanged. A trailing `.` or `..` segment is
/// treated as `./` or `../`, so the result keeps its trailing slash. Empty
/// segments are kept, which means `//` survives and a leading `/` stays
/// leading. A `..` never climbs above the root of an absolute path.
///
/// # Examples
///
/// - `canonicalize_path("/a/./b/../c")` → `"/a/c"`
/// - `canonicalize_path("/a/b/..")` → `"/a/"`
/// - `canonicalize_path("/../a")` → `"/a"`
pub fn canonicalize_path(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return path.to_string();
    }

    let with_slash;
    let path = match path.rsplit('/').next() {
        Some(".") | Some("..") => {
            with_slash = format!("{path}/");
            with_slash.as_str()
        }
        _ => path,
    };

    // output[0] == "" is the root marker for absolute paths.
    let rooted = path.starts_with('/');
    let mut output: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            ".." => {
                if !rooted || output.len() > 1 {
                    output.pop();
                }
            }
            "." => {}
            other => output.push(other),
        }
    }

    output.join("/")
}
