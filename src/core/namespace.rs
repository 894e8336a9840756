//! Package namespacing.
//!
//! Packages exported through the shared module registry are renamed with the
//! identity of the project that owns them, so two projects shipping the same
//! dependency never collide. The owner's name is embedded before a `$`
//! separator:
//!
//! - `lodash` owned by `my-app` becomes `my-app$lodash`
//! - `@acme/tools` owned by `my-app` becomes `@my-app$acme/tools`
//! - `lodash` owned by `@corp/app` becomes `corp%2Fapp$lodash`

const SEPARATOR: char = '$';

/// Turn an owner package name into a namespace usable inside a package name.
fn uglify(owner_name: &str) -> String {
    owner_name.trim_start_matches('@').replace('/', "%2F")
}

/// Namespace `name` with the identity of `owner_name`.
///
/// Names that already carry a namespace are returned unchanged.
pub fn add_namespace(name: &str, owner_name: &str) -> String {
    if get_namespace(name).is_some() {
        return name.to_string();
    }

    let namespace = uglify(owner_name);

    match name.strip_prefix('@') {
        Some(scoped) => format!("@{}{}{}", namespace, SEPARATOR, scoped),
        None => format!("{}{}{}", namespace, SEPARATOR, name),
    }
}

/// Get the namespace embedded in `name`, if any.
pub fn get_namespace(name: &str) -> Option<&str> {
    let unscoped = name.strip_prefix('@').unwrap_or(name);
    // Only the first path segment may carry a namespace
    let head = unscoped.split('/').next().unwrap_or(unscoped);

    head.split_once(SEPARATOR).map(|(namespace, _)| namespace)
}

/// Strip the namespace from `name`, if any.
pub fn remove_namespace(name: &str) -> String {
    let Some(namespace) = get_namespace(name) else {
        return name.to_string();
    };

    // namespace + separator
    let skip = namespace.len() + SEPARATOR.len_utf8();

    match name.strip_prefix('@') {
        Some(scoped) => format!("@{}", &scoped[skip..]),
        None => name[skip..].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_namespace_unscoped() {
        assert_eq!(add_namespace("lodash", "my-app"), "my-app$lodash");
    }

    #[test]
    fn test_add_namespace_scoped() {
        assert_eq!(add_namespace("@acme/tools", "my-app"), "@my-app$acme/tools");
    }

    #[test]
    fn test_add_namespace_scoped_owner() {
        assert_eq!(add_namespace("lodash", "@corp/app"), "corp%2Fapp$lodash");
        assert_eq!(
            add_namespace("@acme/tools", "@corp/app"),
            "@corp%2Fapp$acme/tools"
        );
    }

    #[test]
    fn test_add_namespace_is_deterministic() {
        let first = add_namespace("@acme/tools", "my-app");
        let second = add_namespace("@acme/tools", "my-app");
        assert_eq!(first, second);
    }

    #[test]
    fn test_add_namespace_keeps_existing() {
        assert_eq!(add_namespace("my-app$lodash", "other"), "my-app$lodash");
    }

    #[test]
    fn test_get_namespace() {
        assert_eq!(get_namespace("my-app$lodash"), Some("my-app"));
        assert_eq!(get_namespace("@my-app$acme/tools"), Some("my-app"));
        assert_eq!(get_namespace("lodash"), None);
        assert_eq!(get_namespace("lodash/a$b"), None);
    }

    #[test]
    fn test_remove_namespace() {
        assert_eq!(remove_namespace("my-app$lodash"), "lodash");
        assert_eq!(remove_namespace("@my-app$acme/tools"), "@acme/tools");
        assert_eq!(remove_namespace("lodash"), "lodash");
        assert_eq!(
            remove_namespace(&add_namespace("@acme/tools", "@corp/app")),
            "@acme/tools"
        );
    }
}
