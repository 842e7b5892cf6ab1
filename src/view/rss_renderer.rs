use std::io::Cursor;

use chrono::{TimeZone, Utc};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::content::{post_link, Post};
use crate::text_utils::start_of_day;

/* Example
<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
  <title>My Blog</title>
  <link>https://example.com</link>
  <description>Posts about Rust</description>
  <item>
    <title>Building a Blog with Rust</title>
    <link>https://example.com/posts/building_a_blog</link>
    <guid isPermaLink="true">https://example.com/posts/building_a_blog</guid>
    <description><![CDATA[<p>Rust is a great fit...</p>]]></description>
    <pubDate>Mon, 15 Jan 2024 00:00:00 +0000</pubDate>
    <category>rust</category>
  </item>
</channel>
</rss>
*/

pub struct RssChannel<'a> {
    pub ch_title: &'a str,
    pub ch_link: &'a str,
    pub ch_desc: &'a str,
}

impl<'a> RssChannel<'a> {
    pub fn render(&self, posts: &[&Post]) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        writer.write_event(Event::Start(rss))?;
        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        push_text(&mut writer, "title", self.ch_title)?;
        push_text(&mut writer, "link", self.ch_link)?;
        push_text(&mut writer, "description", self.ch_desc)?;

        for post in posts {
            writer.write_event(Event::Start(BytesStart::new("item")))?;

            push_text(&mut writer, "title", post.title())?;

            let link = full_link(self.ch_link, &post.slug);
            push_text(&mut writer, "link", &link)?;

            let mut guid_elem = BytesStart::new("guid");
            guid_elem.push_attribute(("isPermaLink", "true"));
            writer.write_event(Event::Start(guid_elem))?;
            writer.write_event(Event::Text(BytesText::new(&link)))?;
            writer.write_event(Event::End(BytesEnd::new("guid")))?;

            push_cdata(&mut writer, "description", &post.summary)?;

            let published = Utc.from_utc_datetime(&start_of_day(post.date().date()));
            push_text(&mut writer, "pubDate", &published.to_rfc2822())?;

            for tag in post.tags() {
                push_text(&mut writer, "category", tag)?;
            }

            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        Ok(writer.into_inner().into_inner())
    }
}

fn full_link(base_url: &str, slug: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), post_link(slug))
}

fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn push_cdata(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    // "]]>" would close the section early
    let text = text.replace("]]>", "]] >");
    writer.write_event(Event::CData(BytesCData::new(text.as_str())))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::str;
    use std::str::FromStr;

    use crate::content::front_matter::FrontMatter;
    use crate::content::post_date::PostDate;

    use super::*;

    fn create_post(id: &str, title: &str) -> Post {
        Post {
            slug: format!("post-{}", id),
            source_path: PathBuf::from(format!("post-{}.md", id)),
            front_matter: FrontMatter {
                title: title.to_string(),
                date: PostDate::from_str("2024-01-02").unwrap(),
                tags: vec![format!("tag-{}", id)],
            },
            content: String::new(),
            html: String::new(),
            summary: format!("<p>summary-{}</p>", id),
        }
    }

    #[test]
    fn render_xml() {
        let first = create_post("1", "Fish & Chips");
        let second = create_post("2", "title-2");

        let rss = RssChannel {
            ch_title: "my feed",
            ch_link: "https://example.com/",
            ch_desc: "My blog feed",
        };
        let xml = rss.render(&[&first, &second]).unwrap();
        assert_eq!(str::from_utf8(&xml).unwrap(), EXPECTED);
    }

    #[test]
    fn render_cdata_terminator() {
        let mut post = create_post("1", "t");
        post.summary = "<p>a]]>b</p>".to_string();
        let rss = RssChannel { ch_title: "t", ch_link: "https://example.com", ch_desc: "d" };
        let xml = String::from_utf8(rss.render(&[&post]).unwrap()).unwrap();
        assert!(xml.contains("<![CDATA[<p>a]] >b</p>]]>"));
    }

    const EXPECTED: &str = r##"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0"><channel><title>my feed</title><link>https://example.com/</link><description>My blog feed</description><item><title>Fish &amp; Chips</title><link>https://example.com/posts/post-1</link><guid isPermaLink="true">https://example.com/posts/post-1</guid><description><![CDATA[<p>summary-1</p>]]></description><pubDate>Tue, 2 Jan 2024 00:00:00 +0000</pubDate><category>tag-1</category></item><item><title>title-2</title><link>https://example.com/posts/post-2</link><guid isPermaLink="true">https://example.com/posts/post-2</guid><description><![CDATA[<p>summary-2</p>]]></description><pubDate>Tue, 2 Jan 2024 00:00:00 +0000</pubDate><category>tag-2</category></item></channel></rss>"##;
}
