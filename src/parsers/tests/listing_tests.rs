use crate::parsers::listing::{self, Pagination};
use crate::parsers::tests::fixtures::{
    hotel_entry, hotel_entry_in, last_page_marker, list_page, next_link,
};
use crate::results::PageRef;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_entries_with_last_page_marker() {
        let html = list_page(
            &[
                hotel_entry(
                    "Hotel Commonwealth",
                    "/Hotel_Review-d1.html",
                    Some("4.5 of 5 stars"),
                    Some("1,234 reviews"),
                ),
                hotel_entry("Harborside Inn", "/Hotel_Review-d2.html", None, Some("87 reviews")),
            ],
            &last_page_marker(),
        );

        let page = listing::parse(&html);
        assert_eq!(page.layout, Some(0));
        assert_eq!(page.entries.len(), 2);
        assert_eq!(page.pagination, Pagination::LastPage);

        let first = &page.entries[0];
        assert_eq!(first.name, "Hotel Commonwealth");
        assert_eq!(first.detail_ref, Some(PageRef::new("/Hotel_Review-d1.html")));
        assert_eq!(first.stars, "4.5");
        assert_eq!(first.total_reviews, "1,234 reviews");

        let second = &page.entries[1];
        assert_eq!(second.name, "Harborside Inn");
        assert_eq!(second.stars, "");
        assert_eq!(second.total_reviews, "87 reviews");
    }

    #[test]
    fn test_next_link_is_returned() {
        let html = list_page(
            &[hotel_entry("A", "/a.html", Some("3 of 5 stars"), None)],
            &next_link("/Hotels-g60745-oa30-Boston.html"),
        );

        let page = listing::parse(&html);
        assert_eq!(
            page.pagination,
            Pagination::Next(PageRef::new("/Hotels-g60745-oa30-Boston.html"))
        );
        assert_eq!(page.entries[0].total_reviews, "");
    }

    #[test]
    fn test_last_page_marker_wins_over_next_link() {
        let pagination = r#"<div class="pagination paginationfillbtm">
            <a href="/next.html">&raquo;</a>
            <span class="guiArw pageEndNext"></span>
        </div>"#;
        let page = listing::parse(&list_page(&[], pagination));
        assert_eq!(page.pagination, Pagination::LastPage);
    }

    #[test]
    fn test_pagination_without_marker_or_next_is_dangling() {
        let pagination = r#"<div class="pagination paginationfillbtm">
            <a href="/prev.html">&laquo;</a><a href="/page-2.html">2</a>
        </div>"#;
        let page = listing::parse(&list_page(&[], pagination));
        assert_eq!(page.pagination, Pagination::Dangling);
    }

    #[test]
    fn test_missing_pagination_control_is_reported_as_absent() {
        let page = listing::parse(&list_page(&[hotel_entry("A", "/a.html", None, None)], ""));
        assert_eq!(page.pagination, Pagination::Absent);
    }

    #[test]
    fn test_falls_back_to_later_layouts() {
        let html = list_page(
            &[
                hotel_entry_in("listing_info jfy", "A", "/a.html", None, None),
                hotel_entry_in("listing easyClear  p13n_imperfect", "B", "/b.html", None, None),
            ],
            &last_page_marker(),
        );

        let page = listing::parse(&html);
        assert_eq!(page.layout, Some(1));
        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.entries[0].name, "A");

        let html = list_page(
            &[hotel_entry_in("listing easyClear  p13n_imperfect", "B", "/b.html", None, None)],
            &last_page_marker(),
        );
        let page = listing::parse(&html);
        assert_eq!(page.layout, Some(2));
        assert_eq!(page.entries[0].name, "B");
    }

    #[test]
    fn test_no_known_layout_yields_no_entries() {
        let html = list_page(
            &[hotel_entry_in("some_new_layout", "A", "/a.html", None, None)],
            &last_page_marker(),
        );
        let page = listing::parse(&html);
        assert_eq!(page.layout, None);
        assert!(page.entries.is_empty());
    }

    #[test]
    fn test_entries_keep_document_order() {
        let names = ["One", "Two", "Three", "Four"];
        let entries: Vec<String> = names
            .iter()
            .map(|n| hotel_entry(n, &format!("/{}.html", n), None, None))
            .collect();

        let page = listing::parse(&list_page(&entries, &last_page_marker()));
        let parsed: Vec<&str> = page.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(parsed, names);
    }

    #[test]
    fn test_parsing_twice_is_identical() {
        let html = list_page(
            &[
                hotel_entry("A", "/a.html", Some("4 of 5 stars"), Some("10 reviews")),
                hotel_entry("B", "/b.html", None, None),
            ],
            &next_link("/next.html"),
        );
        assert_eq!(listing::parse(&html), listing::parse(&html));
    }

    #[test]
    fn test_review_count_skips_unrelated_text() {
        let entry = r#"<div class="listing_info jfy">
            <a target="_blank" href="/a.html">A</a>
            <span class="more">See all <b>2,001 reviews</b> and photos</span>
        </div>"#;
        let page = listing::parse(&list_page(&[entry.to_string()], ""));
        assert_eq!(page.entries[0].total_reviews, "2,001 reviews");
    }

    #[test]
    fn test_entry_without_link_keeps_empty_name() {
        let entry = r#"<div class="listing_info jfy"><span class="more">5 reviews</span></div>"#;
        let page = listing::parse(&list_page(&[entry.to_string()], ""));
        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.entries[0].name, "");
        assert_eq!(page.entries[0].detail_ref, None);
        assert_eq!(page.entries[0].total_reviews, "5 reviews");
    }
}
