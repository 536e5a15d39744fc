//! Adding use case methods to an API client that already exists.

/// Whether `source` already declares `async <method>(`.
pub fn declares_method(source: &str, method: &str) -> bool {
    let needle = format!("async {method}(");
    source.lines().any(|line| line.trim_start().starts_with(&needle))
}

/// Insert a rendered method before the closing brace of the last
/// unindented block in `source`, separated by a blank line.
///
/// `None` when the file has no such closing line.
pub fn insert_method(source: &str, fragment: &str) -> Option<String> {
    let eol = if source.contains("\r\n") { "\r\n" } else { "\n" };
    let lines: Vec<&str> = source.split_inclusive('\n').collect();
    let close = lines.iter().rposition(|line| line.starts_with('}'))?;

    let mut out = String::with_capacity(source.len() + fragment.len() + 2 * eol.len());
    for line in &lines[..close] {
        out.push_str(line);
    }
    out.push_str(eol);
    for line in fragment.lines() {
        out.push_str(line);
        out.push_str(eol);
    }
    for line in &lines[close..] {
        out.push_str(line);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENT: &str = "export class ProductsApi {\n  async getProduct(id?: string): Promise<unknown> {\n    return id;\n  }\n}\n";

    const METHOD: &str = "  async listProducts(): Promise<unknown> {\n    return [];\n  }";

    #[test]
    fn finds_declared_methods_only() {
        assert!(declares_method(CLIENT, "getProduct"));
        assert!(!declares_method(CLIENT, "listProducts"));
        assert!(!declares_method("// async listProducts( was removed\n", "listProducts"));
    }

    #[test]
    fn method_goes_before_the_class_close() {
        let out = insert_method(CLIENT, METHOD).unwrap();
        assert_eq!(
            out,
            "export class ProductsApi {\n  async getProduct(id?: string): Promise<unknown> {\n    return id;\n  }\n\n  async listProducts(): Promise<unknown> {\n    return [];\n  }\n}\n"
        );
        assert!(declares_method(&out, "listProducts"));
    }

    #[test]
    fn text_after_the_class_is_kept() {
        let source = "export class A {\n}\n\nexport default A;\n";
        let out = insert_method(source, METHOD).unwrap();
        assert!(out.ends_with("  }\n}\n\nexport default A;\n"));
    }

    #[test]
    fn crlf_files_stay_crlf() {
        let out = insert_method("class A {\r\n}\r\n", "  m() {}").unwrap();
        assert_eq!(out, "class A {\r\n\r\n  m() {}\r\n}\r\n");
    }

    #[test]
    fn file_without_a_block_is_refused() {
        assert_eq!(insert_method("export const x = 1;\n", METHOD), None);
    }
}
