use dom::Document;
use dom_utils::{
    by_class_name, by_id, by_tag_name, child, query, query_all, query_all_within, query_within,
};

fn page() -> Document {
    Document::from_markup(
        "<body>\
           <nav id=\"menu\">\
             <a class=\"item\" href=\"/a\">A</a>\
             <a class=\"item active\" href=\"/b\">B</a>\
           </nav>\
           <main>\
             <section id=\"posts\">\
               <article class=\"post\"><h2>One</h2></article>\
               <article class=\"post draft\"><h2>Two</h2></article>\
             </section>\
             <aside><a class=\"item\" href=\"/c\">C</a></aside>\
           </main>\
         </body>",
    )
}

#[test]
fn by_id_finds_the_first_match_or_none() {
    let doc = page();
    let menu = by_id(&doc, "menu").unwrap();
    assert_eq!(doc.tag_name(menu), Some("nav"));
    assert!(by_id(&doc, "absent").is_none());
}

#[test]
fn by_class_and_tag_collect_in_document_order() {
    let doc = page();
    let items = by_class_name(&doc, "item");
    assert_eq!(items.len(), 3);
    let hrefs: Vec<_> = items.iter().map(|&a| doc.attr(a, "href").unwrap()).collect();
    assert_eq!(hrefs, ["/a", "/b", "/c"]);

    assert_eq!(by_tag_name(&doc, "article").len(), 2);
    // Tag lookup is case-insensitive.
    assert_eq!(by_tag_name(&doc, "ARTICLE").len(), 2);
}

#[test]
fn misses_yield_empty_collections() {
    let doc = page();
    assert!(by_class_name(&doc, "nope").is_empty());
    assert!(by_tag_name(&doc, "video").is_empty());
    assert!(query_all(&doc, ".nope > video").is_empty());
    assert!(query(&doc, "#absent").is_none());
}

#[test]
fn query_honors_combinators() {
    let doc = page();
    let active = query(&doc, "nav .active").unwrap();
    assert_eq!(doc.attr(active, "href"), Some("/b"));

    // Child combinator rejects the nested heading.
    assert!(query(&doc, "section > h2").is_none());
    assert_eq!(query_all(&doc, "article > h2").len(), 2);

    let drafts = query_all(&doc, "#posts .post.draft");
    assert_eq!(drafts.len(), 1);
}

#[test]
fn scoped_query_excludes_the_scope_root() {
    let doc = page();
    let posts = by_id(&doc, "posts").unwrap();
    // The root matches the selector itself but only descendants count.
    assert!(query_within(&doc, posts, "#posts").is_none());
    assert_eq!(query_all_within(&doc, posts, "article").len(), 2);
    assert!(query_within(&doc, posts, ".item").is_none());
}

#[test]
fn invalid_selector_members_are_skipped() {
    let doc = page();
    // The malformed member contributes nothing; the valid one still matches.
    assert_eq!(query_all(&doc, "article, ???").len(), 2);
    assert!(query_all(&doc, "???").is_empty());
}

#[test]
fn child_indexes_element_children_only() {
    let doc = page();
    let menu = by_id(&doc, "menu").unwrap();
    let second = child(&doc, menu, 1).unwrap();
    assert_eq!(doc.attr(second, "href"), Some("/b"));
    assert!(child(&doc, menu, 2).is_none());
}

#[test]
fn lookup_results_are_snapshots() {
    let mut doc = page();
    let items = by_class_name(&doc, "item");
    let menu = by_id(&doc, "menu").unwrap();
    doc.remove_children(menu);
    // The earlier Vec is unchanged, even though the tree moved on.
    assert_eq!(items.len(), 3);
    assert_eq!(by_class_name(&doc, "item").len(), 1);
}
