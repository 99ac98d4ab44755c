//! Rupee amounts, ratings and counts as shown in the views

/// Groups an integer string the Indian way: last three digits, then pairs.
/// "1234567" -> "12,34,567"
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// "₹12,34,567"; paise are shown only when present
pub fn format_inr(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let rounded = (abs * 100.0).round() / 100.0;
    let whole = rounded.trunc();
    let paise = ((rounded - whole) * 100.0).round() as u64;
    let grouped = group_indian(&format!("{:.0}", whole));
    if paise == 0 {
        format!("{}₹{}", sign, grouped)
    } else {
        format!("{}₹{}.{:02}", sign, grouped, paise)
    }
}

/// "4.3★"
pub fn format_rating(rating: f32) -> String {
    format!("{:.1}★", rating)
}

pub fn pluralize(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(749.0), "₹749");
        assert_eq!(format_inr(1_299.0), "₹1,299");
        assert_eq!(format_inr(1_234_567.0), "₹12,34,567");
        assert_eq!(format_inr(69_900.5), "₹69,900.50");
        assert_eq!(format_inr(-2_500.0), "-₹2,500");
    }

    #[test]
    fn test_small_helpers() {
        assert_eq!(format_rating(4.0), "4.0★");
        assert_eq!(pluralize(1, "item", "items"), "1 item");
        assert_eq!(pluralize(3, "item", "items"), "3 items");
    }
}
