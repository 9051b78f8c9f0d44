//! Demo fixtures loaded into the memory store at startup

use chrono::{DateTime, TimeZone, Utc};
use crud_types::{Category, Post};

fn at(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

fn category(
    id: u64,
    name: &str,
    description: &str,
    color: &str,
    created_at: DateTime<Utc>,
) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        created_at,
    }
}

fn post(
    id: u64,
    title: &str,
    content: &str,
    user_id: u64,
    published: bool,
    created_at: DateTime<Utc>,
) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        user_id: user_id.to_string(),
        published,
        created_at,
    }
}

pub fn demo_categories() -> Vec<Category> {
    vec![
        category(
            1,
            "Technology",
            "Posts about technology and programming",
            "#3B82F6",
            at(10, 8, 0),
        ),
        category(2, "Design", "UI/UX design and visual content", "#8B5CF6", at(10, 8, 30)),
        category(3, "Business", "Business strategy and entrepreneurship", "#10B981", at(10, 9, 0)),
        category(4, "Tutorial", "Step-by-step guides and tutorials", "#F59E0B", at(10, 9, 30)),
    ]
}

pub fn demo_posts() -> Vec<Post> {
    vec![
        post(
            1,
            "Getting Started with Next.js",
            "Next.js is a powerful React framework that enables you to build full-stack web applications...",
            1,
            true,
            at(20, 10, 0),
        ),
        post(
            2,
            "Modern CSS Techniques",
            "CSS has evolved significantly over the years. Modern techniques like Grid and Flexbox...",
            2,
            true,
            at(21, 14, 30),
        ),
        post(
            3,
            "Building REST APIs",
            "RESTful APIs are the backbone of modern web applications. In this post, we will explore...",
            1,
            false,
            at(22, 9, 45),
        ),
        post(
            4,
            "TypeScript Best Practices",
            "TypeScript adds static typing to JavaScript, making your code more robust and maintainable...",
            3,
            true,
            at(23, 16, 20),
        ),
        post(
            5,
            "Database Design Patterns",
            "Good database design is crucial for application performance. Let us explore common patterns...",
            4,
            true,
            at(24, 11, 15),
        ),
    ]
}
