/// daisyUI badge class for a backend status string.
pub fn status_badge_class(status: &str) -> &'static str {
    match status.trim().to_ascii_uppercase().as_str() {
        "PENDING" | "OPEN" | "IN_REVIEW" | "WAITING_PAYMENT" => "badge badge-warning",
        "VERIFIED" | "COMPLETED" | "RESOLVED" | "CONFIRMED" | "PAID" | "SUCCESS" => {
            "badge badge-success"
        }
        "REJECTED" | "CANCELLED" | "FAILED" | "EXPIRED" => "badge badge-error",
        _ => "badge badge-ghost",
    }
}

/// `PAYOUT_LANDLORD` -> `Payout landlord`.
pub fn humanize(value: &str) -> String {
    let lower = value.trim().replace('_', " ").to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
