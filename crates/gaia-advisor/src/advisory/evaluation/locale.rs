/// Rounds to the nearest rupee and groups digits the Indian way (`12,00,000`).
pub(crate) fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };

    if digits.len() <= 3 {
        return format!("{sign}{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{sign}{},{tail}", groups.join(","))
}

/// Percentage with a single decimal place, as shown in overrun titles.
///
/// An exact tie between two tenths rounds away from zero; every other value rounds to the
/// nearest tenth of its exact binary value.
pub(crate) fn format_percent(value: f64) -> String {
    let magnitude = value.abs();
    let twentieths = magnitude * 20.0;
    let exact_tie = magnitude.mul_add(20.0, -twentieths) == 0.0
        && twentieths.fract() == 0.0
        && twentieths % 2.0 == 1.0;

    if !exact_tie {
        return format!("{value:.1}");
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let tenths = (twentieths + 1.0) / 2.0;
    format!("{sign}{:.1}", tenths / 10.0)
}
