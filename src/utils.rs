/// Interpret a loosely-typed yes/no token.
///
/// `y`, `yes`, `on`, `t` and `true` (any case) are true; `n`, `no`,
/// `off`, `f` and `false` are false. Anything else, the empty string
/// included, is `None`.
pub(crate) fn parse_bool(val: &str) -> Option<bool> {
    match val.to_lowercase().as_str() {
        "y" | "yes" | "on" | "t" | "true" => Some(true),
        "n" | "no" | "off" | "f" | "false" => Some(false),
        _ => None,
    }
}
