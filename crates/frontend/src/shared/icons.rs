use leptos::prelude::*;

/// Stroke paths (24x24 viewBox) for each icon name.
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "users" => &[
            "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
            "M23 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        "user" => &[
            "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
            "M12 3a4 4 0 1 0 0 8 4 4 0 1 0 0-8z",
        ],
        "building" => &["M3 22h18", "M6 22V8l6-5 6 5v14", "M9 13h6v9H9z"],
        "check-circle" => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4 12 14.01l-3-3"],
        "trending-up" => &["M23 6l-9.5 9.5-5-5L1 18", "M17 6h6v6"],
        "clock" => &["M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z", "M12 6v6l4 2"],
        "dollar-sign" => &["M12 1v22", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
        "list-check" => &["M11 6h10", "M11 12h10", "M11 18h10", "M3 6l1.5 1.5L7 5", "M3 12l1.5 1.5L7 11", "M3 18l1.5 1.5L7 17"],
        "alarm" => &["M12 5a8 8 0 1 0 0 16 8 8 0 1 0 0-16z", "M12 9v4l2 2", "M5 3 2 6", "M22 6l-3-3"],
        "rocket" => &[
            "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
            "M12 15l-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
        ],
        "home" => &["M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"],
        "activity" => &["M22 12h-4l-3 9L9 3l-3 9H2"],
        "calendar" => &["M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "M16 2v4", "M8 2v4", "M3 10h18"],
        "bar-chart" => &["M12 20V10", "M18 20V4", "M6 20v-4"],
        "layers" => &["M12 2 2 7l10 5 10-5-10-5z", "M2 17l10 5 10-5", "M2 12l10 5 10-5"],
        "message-square" => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
        "search" => &["M11 3a8 8 0 1 0 0 16 8 8 0 1 0 0-16z", "M21 21l-4.35-4.35"],
        "x" => &["M18 6 6 18", "M6 6l12 12"],
        "menu" => &["M3 12h18", "M3 6h18", "M3 18h18"],
        "bell" => &["M18 8A6 6 0 0 0 6 8c0 7-3 9-3 9h18s-3-2-3-9", "M13.73 21a2 2 0 0 1-3.46 0"],
        "chevron-left" => &["M15 18l-6-6 6-6"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "plus" => &["M12 5v14", "M5 12h14"],
        "mail" => &["M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "M22 6l-10 7L2 6"],
        "phone" => &["M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.79 19.79 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"],
        "map-pin" => &["M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z", "M12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6z"],
        "git-branch" => &["M6 3v12", "M18 6a3 3 0 1 0 0 .01", "M6 18a3 3 0 1 0 0 .01", "M18 9a9 9 0 0 1-9 9"],
        "award" => &["M12 1a7 7 0 1 0 0 14 7 7 0 1 0 0-14z", "M8.21 13.89 7 23l5-3 5 3-1.21-9.12"],
        "send" => &["M22 2 11 13", "M22 2l-7 20-4-9-9-4 20-7z"],
        "paperclip" => &["M21.44 11.05l-9.19 9.19a6 6 0 0 1-8.49-8.49l9.19-9.19a4 4 0 0 1 5.66 5.66l-9.2 9.19a2 2 0 0 1-2.83-2.83l8.49-8.48"],
        "edit" => &["M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7", "M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"],
        "download" => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "M7 10l5 5 5-5", "M12 15V3"],
        "filter" => &["M22 3H2l8 9.46V19l4 2v-8.54L22 3z"],
        "refresh" => &["M23 4v6h-6", "M1 20v-6h6", "M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15"],
        "star" => &["M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"],
        _ => &["M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z", "M12 8v4l3 3"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let paths = icon_paths(name);
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d={*d} /> }).collect_view()}
        </svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::navigation::PageId;

    #[test]
    fn test_every_nav_icon_is_drawn() {
        let fallback = icon_paths("no-such-icon");
        for page in PageId::ALL {
            assert_ne!(icon_paths(page.icon()), fallback, "{}", page.icon());
        }
    }
}
