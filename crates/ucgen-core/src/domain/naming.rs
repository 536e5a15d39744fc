//! Case conversion for kebab-case identifiers.
//!
//! Inputs are expected to be validated [`Identifier`](super::Identifier)
//! strings, so there are no failure modes: a segment is whatever sits between
//! two `-`.
//!
//! | Input          | camel        | Pascal       | CONST          |
//! |----------------|--------------|--------------|----------------|
//! | `products`     | `products`   | `Products`   | `PRODUCTS`     |
//! | `get-product`  | `getProduct` | `GetProduct` | `GET_PRODUCT`  |
//! | `get-2fa-code` | `get2faCode` | `Get2faCode` | `GET_2FA_CODE` |

/// `get-product` → `getProduct`
pub fn to_camel_case(id: &str) -> String {
    let mut segments = id.split('-');
    let mut out = segments.next().unwrap_or_default().to_lowercase();
    for segment in segments {
        out.push_str(&capitalize(segment));
    }
    out
}

/// `get-product` → `GetProduct`
pub fn to_pascal_case(id: &str) -> String {
    id.split('-').map(capitalize).collect()
}

/// `get-product` → `GET_PRODUCT`
pub fn to_const_case(id: &str) -> String {
    id.to_uppercase().replace('-', "_")
}

/// `get-product` → `get/product`, used to derive endpoint paths.
pub fn to_path_segments(id: &str) -> String {
    id.replace('-', "/")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(segment.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "products",
        "get-product",
        "get-2fa-code",
        "list-all-order-items",
        "v1",
    ];

    #[test]
    fn camel_case() {
        assert_eq!(to_camel_case("products"), "products");
        assert_eq!(to_camel_case("get-product"), "getProduct");
        assert_eq!(to_camel_case("list-all-order-items"), "listAllOrderItems");
        assert_eq!(to_camel_case("get-2fa-code"), "get2faCode");
    }

    #[test]
    fn pascal_case() {
        assert_eq!(to_pascal_case("products"), "Products");
        assert_eq!(to_pascal_case("get-product"), "GetProduct");
        assert_eq!(to_pascal_case("get-2fa-code"), "Get2faCode");
    }

    #[test]
    fn const_case() {
        assert_eq!(to_const_case("products"), "PRODUCTS");
        assert_eq!(to_const_case("get-product"), "GET_PRODUCT");
        assert_eq!(to_const_case("get-2fa-code"), "GET_2FA_CODE");
    }

    #[test]
    fn casings_agree_with_each_other() {
        for id in SAMPLES {
            let camel = to_camel_case(id);
            let pascal = to_pascal_case(id);
            let constant = to_const_case(id);

            // CONST is the identifier uppercased with '-' → '_'.
            assert_eq!(constant, id.to_uppercase().replace('-', "_"));
            // camel and Pascal only differ in the first character.
            assert_eq!(camel.to_uppercase(), pascal.to_uppercase());
            assert_eq!(camel[1..], pascal[1..]);
            // Every form spells the same letters as CONST without separators.
            assert_eq!(pascal.to_uppercase(), constant.replace('_', ""));
        }
    }

    #[test]
    fn const_case_determines_identifier() {
        for id in SAMPLES {
            let recovered = to_const_case(id).to_lowercase().replace('_', "-");
            assert_eq!(&recovered, id);
        }
    }

    #[test]
    fn conversions_are_deterministic() {
        for id in SAMPLES {
            assert_eq!(to_camel_case(id), to_camel_case(id));
            assert_eq!(to_pascal_case(id), to_pascal_case(id));
            assert_eq!(to_const_case(id), to_const_case(id));
        }
    }

    #[test]
    fn path_segments() {
        assert_eq!(to_path_segments("get-product"), "get/product");
        assert_eq!(to_path_segments("products"), "products");
    }
}
