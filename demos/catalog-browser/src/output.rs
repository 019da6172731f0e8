//! Output formatting for the browser CLI.

use console::style;
use storefront_catalog::prelude::{Pagination, Post, Product};

/// Output handler for CLI messages.
#[derive(Clone, Copy)]
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        println!("{} {}", style("i").blue(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("x").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            eprintln!("{} {}", style("-").dim(), style(msg).dim());
        }
    }

    /// Print one product row.
    pub fn product(&self, product: &Product) {
        let brand = product.brand.as_deref().unwrap_or("-");
        let promo = if product.is_on_promotion() {
            format!(" {}", style("PROMO").yellow().bold())
        } else {
            String::new()
        };
        println!(
            "  {:10} {:40} {:16} {:>8.2} {:>4.1}* {:>6} sold{}",
            style(product.id.as_str()).cyan(),
            product.name,
            brand,
            product.price,
            product.rating,
            product.sold,
            promo,
        );
    }

    /// Print one post row.
    pub fn post(&self, post: &Post) {
        println!(
            "  {:10} {:40} [{}]",
            style(post.id.as_str()).cyan(),
            post.title,
            post.tags.join(", "),
        );
    }

    /// Print a pagination footer.
    pub fn page_footer(&self, pagination: &Pagination) {
        println!(
            "{}",
            style(format!(
                "showing {}-{} of {} (page {}/{})",
                pagination.start_item(),
                pagination.end_item(),
                pagination.total,
                pagination.page,
                pagination.total_pages,
            ))
            .dim()
        );
    }
}
