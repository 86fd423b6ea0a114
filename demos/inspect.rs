//! Inspecting the tags of a few declared fields.
//!
//! Run with: cargo run --example inspect

use field_tags::{DelimiterConfig, Field, Tags};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let fields = vec![
        Field::new("Name", r#"json:"name,omitempty" form:"name""#),
        Field::new(
            "Bio",
            r#"json:"bio" gorm:"index:,class:FULLTEXT,comment:hello world,where:age > 10""#,
        ),
    ];

    for field in &fields {
        let tags = Tags::from_field(field);
        println!("{} `{}`", field.name, tags.raw());

        for tag in &tags {
            println!("  {} = {:?}", tag.key, tag.value);
        }

        let json = tags.require("json")?.delimited(&DelimiterConfig::list());
        println!("  omitempty: {}", json.has_key("omitempty"));

        if let Some(gorm) = tags.get("gorm") {
            for part in &gorm.delimited(&DelimiterConfig::pairs()) {
                println!("  gorm.{} = {:?}", part.key, part.value);
            }
        }
    }

    Ok(())
}
