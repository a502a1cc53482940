//! Home page generation

use maud::{Markup, html};

use super::resolve_link;
use crate::components::layout::page_wrapper;
use crate::content::SiteContent;
use crate::markdown::render_inline;
use crate::routes::{LinkStyle, Route};

/// Generates the home page
///
/// Shows the profile introduction, research interest cards and the news
/// list. Bio paragraphs and news entries accept inline markdown.
pub fn render(content: &SiteContent, links: LinkStyle) -> Markup {
    let profile = &content.profile;

    page_wrapper(
        content,
        &Route::Home,
        links,
        "Home",
        html! {
            section.hero {
                h1.hero-name { (profile.name) }
                @if let Some(tagline) = &profile.tagline {
                    p.hero-tagline { (tagline) }
                }
                @for paragraph in &profile.bio {
                    p.hero-bio { (render_inline(paragraph)) }
                }
                @if let Some(url) = &profile.scholar_url {
                    a.scholar-link href=(url) target="_blank" rel="noreferrer" {
                        i.ph.ph-graduation-cap {}
                        " Google Scholar"
                    }
                }
            }

            @if !content.research.is_empty() {
                section.research {
                    h2.section-title { "Research Interests" }
                    div.research-grid {
                        @for interest in &content.research {
                            @let classes = match &interest.color_theme {
                                Some(theme) => format!("research-card {}", theme),
                                None => "research-card".to_string(),
                            };
                            div class=(classes) {
                                h3.research-title { (interest.title) }
                                @if let Some(period) = &interest.period {
                                    span.research-period { (period) }
                                }
                                p.research-description { (interest.description) }
                            }
                        }
                    }
                }
            }

            @if !content.news.is_empty() {
                section.news {
                    h2.section-title { "News" }
                    ul.news-list {
                        @for item in &content.news {
                            li.news-item {
                                span.news-date { (item.date) }
                                @if let Some(link) = &item.link {
                                    @let (href, external) = resolve_link(link, links);
                                    @if external {
                                        a.news-content href=(href) target="_blank" rel="noreferrer" {
                                            (render_inline(&item.content))
                                        }
                                    } @else {
                                        a.news-content href=(href) { (render_inline(&item.content)) }
                                    }
                                } @else {
                                    span.news-content { (render_inline(&item.content)) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{NewsItem, Profile, ResearchInterest};

    fn content() -> SiteContent {
        SiteContent {
            profile: Profile {
                name: "Ada Lovelace".to_string(),
                tagline: Some("Engines and alignment".to_string()),
                bio: vec!["I work on **robust** alignment.".to_string()],
                scholar_url: Some("https://scholar.example/ada".to_string()),
            },
            research: vec![ResearchInterest {
                title: "Scalable Oversight".to_string(),
                description: "Supervision beyond human judgement.".to_string(),
                period: Some("2025.12 - until now".to_string()),
                color_theme: Some("theme-mist".to_string()),
            }],
            news: vec![
                NewsItem {
                    date: "2025/11/28".to_string(),
                    content: "Back from Iceland!".to_string(),
                    link: Some("#/travel".to_string()),
                },
                NewsItem {
                    date: "2025/11/8".to_string(),
                    content: "Paper accepted".to_string(),
                    link: Some("https://arxiv.org/abs/2510.04320".to_string()),
                },
                NewsItem {
                    date: "2025/1/1".to_string(),
                    content: "Happy New Year".to_string(),
                    link: None,
                },
            ],
            ..SiteContent::default()
        }
    }

    #[test]
    fn test_home_sections() {
        // Act
        let html = render(&content(), LinkStyle::Query).into_string();

        // Assert
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("<strong>robust</strong>"));
        assert!(html.contains(r#"class="research-card theme-mist""#));
        assert!(html.contains("2025.12 - until now"));
        assert!(html.contains("Google Scholar"));
    }

    #[test]
    fn test_news_links_internal_and_external() {
        let html = render(&content(), LinkStyle::Static { depth: 0 }).into_string();

        assert!(html.contains(r#"<a class="news-content" href="travel/index.html">"#));
        assert!(html.contains(
            r#"<a class="news-content" href="https://arxiv.org/abs/2510.04320" target="_blank" rel="noreferrer">"#
        ));
        assert!(html.contains(r#"<span class="news-content">Happy New Year</span>"#));
    }
}
