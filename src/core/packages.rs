//! Layout of generated packages inside the output `node_modules` tree.

/// Directory name for a package inside a `node_modules` folder.
///
/// Scoped names are flattened (`/` becomes `%2F`) so every package lives in
/// a single directory, and the version is appended when given.
pub fn package_target_dir(name: &str, version: Option<&str>) -> String {
    let mut dir = name.replace('/', "%2F");

    if let Some(version) = version {
        dir.push('@');
        dir.push_str(version);
    }

    dir
}
