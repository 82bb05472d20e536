/// Splits a `KEY=VALUE` argument. The value may itself contain `=` or be empty.
pub fn parse_env_pair(arg: &str) -> Result<(String, String), String> {
    let mut parts = arg.splitn(2, '=');
    let key = parts.next().unwrap_or_default().trim();
    let value = parts
        .next()
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", arg))?;

    if key.is_empty() {
        return Err(format!("missing variable name in `{}`", arg));
    }
    Ok((key.to_owned(), value.to_owned()))
}
