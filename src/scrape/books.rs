// src/scrape/books.rs
use tracing::info;

use crate::{
    browser::{BookPages, PageRenderer},
    config::options::BooksOptions,
    paginate::{collect_pages, Pagination},
    specs::books,
    store::Accumulator,
};

/// Catalog pages `first_page..` through `renderer`, up to `max_pages`.
pub fn collect_books<R: PageRenderer + ?Sized>(
    renderer: &mut R,
    opts: &BooksOptions,
) -> Accumulator {
    let mut acc = Accumulator::with_columns(books::COLUMNS);

    let pagination = Pagination {
        first_page: opts.first_page,
        max_pages: opts.max_pages,
        delay: opts.delay.clone(),
    };
    let mut source = BookPages::new(renderer, opts);
    let paged = collect_pages(&mut source, &pagination);
    info!("{} books over {} page(s)", paged.items.len(), paged.requests);

    acc.extend(paged.items);
    acc
}
