//! Navigation link helpers.

/// Section id a nav link points at, from its `href` attribute.
///
/// Only in-page fragments (`#about`) resolve.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.trim()
        .strip_prefix('#')
        .filter(|id| !id.is_empty())
}

/// Active flag for each of `count` nav items after a click on item `clicked`.
/// At most one flag is set.
pub fn active_states(count: usize, clicked: usize) -> impl Iterator<Item = bool> {
    (0..count).map(move |i| i == clicked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments() {
        assert_eq!(fragment_target("#about"), Some("about"));
        assert_eq!(fragment_target(" #skills "), Some("skills"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("about.html"), None);
        assert_eq!(fragment_target(""), None);
    }

    #[test]
    fn exactly_one_active() {
        let states: Vec<_> = active_states(4, 2).collect();
        assert_eq!(states, [false, false, true, false]);
        assert_eq!(active_states(3, 7).filter(|a| *a).count(), 0);
    }
}
