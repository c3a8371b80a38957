//! Formatting helpers for listing cards.

/// Shown when a listing image is missing or fails to load.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=400&h=300&fit=crop";

/// Listings without an asking price get an explicit placeholder.
pub fn format_price(price: Option<&str>) -> String {
    match price {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => "Price Not Disclosed".to_string(),
    }
}

/// Badge classes for a property type. The table is a fixed partial
/// mapping; unmapped types take the gray default.
pub fn property_type_color(property_type: &str) -> &'static str {
    match property_type {
        "Office" => "bg-blue-100 text-blue-800",
        "Retail" => "bg-green-100 text-green-800",
        "Industrial" => "bg-orange-100 text-orange-800",
        "Warehouse" => "bg-yellow-100 text-yellow-800",
        "Commercial Land" | "Commercial Vacant Land" => "bg-purple-100 text-purple-800",
        "Industrial Land" => "bg-amber-100 text-amber-800",
        "Fast Food" => "bg-red-100 text-red-800",
        "Drug Store" => "bg-teal-100 text-teal-800",
        "Flex" => "bg-indigo-100 text-indigo-800",
        "Light Manufacturing" => "bg-slate-100 text-slate-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_absent() {
        assert_eq!(format_price(None), "Price Not Disclosed");
        assert_eq!(format_price(Some("")), "Price Not Disclosed");
    }

    #[test]
    fn test_format_price_present() {
        assert_eq!(format_price(Some("$1,250,000")), "$1,250,000");
    }

    #[test]
    fn test_property_type_color_known_types() {
        assert_eq!(property_type_color("Office"), "bg-blue-100 text-blue-800");
        assert_eq!(property_type_color("Retail"), "bg-green-100 text-green-800");
        assert_eq!(
            property_type_color("Commercial Vacant Land"),
            "bg-purple-100 text-purple-800"
        );
    }

    #[test]
    fn test_property_type_color_unmapped_falls_back_to_gray() {
        assert_eq!(
            property_type_color("Parking Garage"),
            "bg-gray-100 text-gray-800"
        );
        assert_eq!(property_type_color(""), "bg-gray-100 text-gray-800");
    }
}
