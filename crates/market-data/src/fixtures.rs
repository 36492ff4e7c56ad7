//! Built-in sample content.

use chrono::NaiveDate;
use market_core::models::{BlogPost, GalleryImage, Money, PricingPlan, Product, Service};

fn product(
    id: u32,
    title: &str,
    cents: u64,
    category: &str,
    description: &str,
    rating: f64,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: Money::from_cents(cents),
        category: category.to_string(),
        image: format!("https://picsum.photos/400/400?random={id}"),
        description: description.to_string(),
        rating,
    }
}

pub(crate) fn products() -> Vec<Product> {
    vec![
        product(
            1,
            "Premium Wireless Headphones",
            29_999,
            "Electronics",
            "Experience high-fidelity sound with active noise cancelling and 30-hour battery life.",
            4.8,
        ),
        product(
            2,
            "Minimalist Smart Watch",
            19_950,
            "Electronics",
            "Track your fitness and notifications with style. Water-resistant and durable.",
            4.5,
        ),
        product(
            3,
            "Italian Leather Bag",
            14_900,
            "Fashion",
            "Handcrafted from genuine leather. Perfect for work or travel.",
            4.9,
        ),
        product(
            4,
            "Ergonomic Office Chair",
            34_999,
            "Furniture",
            "Designed for all-day comfort with adjustable lumbar support.",
            4.7,
        ),
        product(
            5,
            "Mechanical Keyboard",
            12_999,
            "Electronics",
            "Tactile switches for the ultimate typing experience. RGB backlighting included.",
            4.6,
        ),
        product(
            6,
            "Designer Sunglasses",
            8_999,
            "Fashion",
            "UV400 protection with a sleek modern frame design.",
            4.4,
        ),
        product(
            7,
            "Ceramic Coffee Set",
            4_999,
            "Home",
            "Beautifully glazed ceramic set including 4 cups and a pot.",
            4.8,
        ),
        product(
            8,
            "Smart Home Hub",
            8_999,
            "Electronics",
            "Control your entire home with voice commands and automation.",
            4.3,
        ),
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub(crate) fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "The Future of Sustainable Fashion".to_string(),
            excerpt: "Exploring how the industry is shifting towards eco-friendly materials and practices."
                .to_string(),
            date: date(2023, 10, 12),
            image: "https://picsum.photos/600/400?random=10".to_string(),
            content: "Sustainable fashion is more than just a trend; it's a necessity. From recycled \
                      fabrics to ethical labor practices, brands are rethinking their impact on the \
                      planet..."
                .to_string(),
        },
        BlogPost {
            id: 2,
            title: "Top 10 Gadgets for 2024".to_string(),
            excerpt: "A curated list of the most innovative tech releases coming this year.".to_string(),
            date: date(2023, 11, 5),
            image: "https://picsum.photos/600/400?random=11".to_string(),
            content: "Get ready for a year of innovation. We've tested the latest prototypes and \
                      these are our top picks for the gadgets that will define 2024..."
                .to_string(),
        },
        BlogPost {
            id: 3,
            title: "Creating a Minimalist Workspace".to_string(),
            excerpt: "Tips and tricks to declutter your desk and boost productivity.".to_string(),
            date: date(2023, 12, 1),
            image: "https://picsum.photos/600/400?random=12".to_string(),
            content: "A cluttered desk leads to a cluttered mind. In this guide, we walk you \
                      through the essential steps to create a serene and productive workspace..."
                .to_string(),
        },
    ]
}

pub(crate) fn services() -> Vec<Service> {
    fn service(id: u32, title: &str, description: &str, icon: &str) -> Service {
        Service {
            id,
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
    vec![
        service(
            1,
            "Express Delivery",
            "Get your products delivered within 24 hours anywhere in the country.",
            "Truck",
        ),
        service(
            2,
            "24/7 Support",
            "Our dedicated team is here to help you anytime, day or night.",
            "Headphones",
        ),
        service(
            3,
            "Secure Payment",
            "We use state-of-the-art encryption to ensure your data is safe.",
            "ShieldCheck",
        ),
        service(
            4,
            "Easy Returns",
            "Not satisfied? Return within 30 days for a full refund.",
            "RefreshCw",
        ),
    ]
}

pub(crate) fn pricing_plans() -> Vec<PricingPlan> {
    fn plan(id: &str, name: &str, price: &str, features: &[&str], recommended: bool) -> PricingPlan {
        PricingPlan {
            id: id.to_string(),
            name: name.to_string(),
            price: price.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            recommended,
        }
    }
    vec![
        plan(
            "basic",
            "Basic",
            "$0",
            &["Access to all products", "Standard Shipping", "Email Support"],
            false,
        ),
        plan(
            "standard",
            "Standard",
            "$9.99/mo",
            &[
                "Free Express Shipping",
                "Priority Support",
                "Early Access to Sales",
                "5% Discount on all items",
            ],
            true,
        ),
        plan(
            "premium",
            "Premium",
            "$19.99/mo",
            &[
                "Free Next-Day Shipping",
                "24/7 Dedicated Support",
                "Exclusive Products",
                "15% Discount on all items",
            ],
            false,
        ),
    ]
}

pub(crate) fn gallery_images() -> Vec<GalleryImage> {
    [
        "600/600?random=20",
        "600/800?random=21",
        "800/600?random=22",
        "600/600?random=23",
        "600/800?random=24",
        "800/600?random=25",
    ]
    .into_iter()
    .map(|tail| GalleryImage {
        src: format!("https://picsum.photos/{tail}"),
    })
    .collect()
}
