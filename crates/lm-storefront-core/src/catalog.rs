//! Static catalog and its card markup.
//!
//! Buttons carry `data-action` / `data-product-id` attributes instead of
//! inline handlers; the frontend delegates clicks from the grid container.

use crate::markup::html_escape;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub logo: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price_label: &'static str,
    pub image: &'static str,
}

pub const BRANDS: &[Brand] = &[
    Brand { name: "Zara", logo: "zara.png" },
    Brand { name: "H&M", logo: "hm.png" },
    Brand { name: "Nike", logo: "nike.png" },
    Brand { name: "Adidas", logo: "adidas.png" },
    Brand { name: "Gucci", logo: "gucci.png" },
    Brand { name: "Prada", logo: "prada.png" },
    Brand { name: "Versace", logo: "versace.png" },
    Brand { name: "Dior", logo: "dior.png" },
    Brand { name: "Louis Vuitton", logo: "louisvuitton.png" },
    Brand { name: "Calvin Klein", logo: "calvinklein.png" },
];

pub const PRODUCTS: &[Product] = &[
    Product { id: 1, name: "Amani Aurelia Linen Wrap Dress", price_label: "Rs.3400", image: "card 01.png" },
    Product { id: 2, name: "Mens Casual Polo T-shirt", price_label: "Rs.2890", image: "card 02.png" },
    Product { id: 3, name: "Sleeveless Linen Jumpsuit", price_label: "Rs.6530", image: "card 03.png" },
    Product { id: 4, name: "Sleeveless Frock", price_label: "Rs.2750", image: "card 04.png" },
    Product { id: 5, name: "Red Short Sleeve Party Wear", price_label: "Rs.11390", image: "card 05.jpg" },
    Product { id: 6, name: "Women Linen Office Pant", price_label: "Rs.2700", image: "card 06.png" },
    Product { id: 7, name: "Long Sleeve Mens White Shirt", price_label: "Rs.2700", image: "card 07.jpg" },
    Product { id: 8, name: "Short Sleeve Black Frock", price_label: "Rs.2400", image: "card 08.jpg" },
];

/// How many times the brand list is repeated in the ticker track.
pub const BRAND_TRACK_COPIES: usize = 3;

pub fn find_product(id: u32) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

fn asset_url(base: &str, file: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        file.to_owned()
    } else {
        format!("{base}/{file}")
    }
}

pub fn brand_card(brand: &Brand, asset_base: &str) -> String {
    let name = html_escape(brand.name);
    format!(
        r#"<div class="brand-card"><img src="{src}" alt="{name}" class="brand-logo"><div class="brand-name">{name}</div></div>"#,
        src = html_escape(&asset_url(asset_base, brand.logo)),
    )
}

pub fn brand_track(brands: &[Brand], asset_base: &str) -> String {
    let once: String = brands.iter().map(|b| brand_card(b, asset_base)).collect();
    once.repeat(BRAND_TRACK_COPIES)
}

pub fn product_card(product: &Product, asset_base: &str) -> String {
    let id = product.id;
    let name = html_escape(product.name);
    let src = html_escape(&asset_url(asset_base, product.image));
    let price = html_escape(product.price_label);
    format!(
        r#"<div class="product-card" data-product-id="{id}">
    <div class="image-container">
        <img src="{src}" alt="{name}" class="product-image">
        <button class="wishlist-btn red-heart" data-action="wishlist" data-product-id="{id}"><i class="fas fa-heart"></i></button>
        <div class="more-details-overlap">
            <button class="more-details-btn" data-action="details" data-product-id="{id}"><i class="fas fa-shipping-fast"></i> More Details</button>
        </div>
    </div>
    <div class="product-details-section">
        <div class="product-name">{name}</div>
        <div class="product-footer">
            <div class="product-price">{price}</div>
            <button class="circular-cart-btn" data-action="cart" data-product-id="{id}"><i class="fas fa-shopping-cart"></i></button>
        </div>
    </div>
</div>"#
    )
}

pub fn product_grid(products: &[Product], asset_base: &str) -> String {
    products
        .iter()
        .map(|p| product_card(p, asset_base))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_track_is_tripled() {
        let markup = brand_track(BRANDS, "/static/images");
        assert_eq!(
            markup.matches(r#"class="brand-card""#).count(),
            BRANDS.len() * BRAND_TRACK_COPIES
        );
        assert!(markup.contains(r#"src="/static/images/zara.png""#));
        assert!(markup.contains("H&amp;M"));
    }

    #[test]
    fn relative_asset_base_matches_standalone_page() {
        let markup = brand_card(&BRANDS[0], "images/");
        assert!(markup.contains(r#"src="images/zara.png""#));
        assert!(brand_card(&BRANDS[0], "").contains(r#"src="zara.png""#));
    }

    #[test]
    fn product_card_wires_actions_by_id() {
        let product = find_product(5).expect("product 5 exists");
        let markup = product_card(product, "/static/images");
        assert!(markup.contains(r#"data-action="wishlist" data-product-id="5""#));
        assert!(markup.contains(r#"data-action="cart" data-product-id="5""#));
        assert!(markup.contains(r#"data-action="details" data-product-id="5""#));
        assert!(markup.contains("Rs.11390"));
        assert!(markup.contains(r#"src="/static/images/card 05.jpg""#));
    }

    #[test]
    fn grid_renders_every_product_in_order() {
        let markup = product_grid(PRODUCTS, "/static/images");
        assert_eq!(markup.matches(r#"class="product-card""#).count(), PRODUCTS.len());
        let first = markup.find(PRODUCTS[0].name).expect("first product");
        let last = markup.find(PRODUCTS[7].name).expect("last product");
        assert!(first < last);
    }

    #[test]
    fn unknown_product_is_none() {
        assert!(find_product(99).is_none());
        assert_eq!(find_product(2).map(|p| p.name), Some("Mens Casual Polo T-shirt"));
    }
}
