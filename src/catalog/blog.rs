//! Blog posts shown in the Search view

/// A blog entry. Opened by id like any catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
    /// Markdown body
    pub content: &'static str,
}

impl BlogPost {
    /// Case-insensitive match against title, summary and content.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.summary.to_lowercase().contains(&query)
            || self.content.to_lowercase().contains(&query)
    }
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: "blog1",
        title: "Understanding Transformers",
        date: "2024-03-10",
        summary: "A deep dive into the architecture that changed NLP forever.",
        content: "# Understanding Transformers\n\n\
The Transformer architecture, introduced in the paper *Attention Is All You Need*, \
has revolutionized natural language processing.\n\n\
## Self-attention\n\n\
Every token looks at every other token and decides how much it matters. \
Stacking these layers with `multi-head attention` lets the model track grammar, \
coreference and topic at the same time.\n\n\
> Recurrence was never the point. Context was.\n",
    },
    BlogPost {
        id: "blog2",
        title: "Optimizing Neural Networks",
        date: "2024-02-15",
        summary: "Techniques for faster convergence and better generalization.",
        content: "# Optimizing Neural Networks\n\n\
Optimization is at the heart of Deep Learning. From SGD to AdamW, \
picking the right optimizer is crucial.\n\n\
- **Learning rate schedules:** warmup followed by cosine decay\n\
- **Regularization:** weight decay, dropout, early stopping\n\
- **Normalization:** batch norm for CNNs, layer norm for transformers\n",
    },
    BlogPost {
        id: "blog3",
        title: "My Journey at IITM",
        date: "2024-01-20",
        summary: "Reflecting on my experience in the BS Data Science program.",
        content: "# My Journey at IITM\n\n\
The BS in Data Science and Applications at IIT Madras is rigorous, challenging, \
and incredibly rewarding.\n\n\
Weekly assignments, proctored exams and a community of learners from every \
background made it the best decision I have made so far.\n",
    },
];

/// Look up a blog post by id.
pub fn find_post(id: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.id == id)
}

/// Posts matching a search query; an empty query returns every post.
pub fn search_posts(query: &str) -> Vec<&'static BlogPost> {
    let query = query.trim();
    BLOG_POSTS
        .iter()
        .filter(|post| query.is_empty() || post.matches(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_post() {
        assert_eq!(find_post("blog2").map(|p| p.title), Some("Optimizing Neural Networks"));
        assert!(find_post("blog9").is_none());
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        assert_eq!(search_posts("").len(), 3);
        assert_eq!(search_posts("   ").len(), 3);
    }

    #[test]
    fn test_search_matches_title_summary_and_content() {
        let ids = |q: &str| search_posts(q).iter().map(|p| p.id).collect::<Vec<_>>();

        assert_eq!(ids("attention"), vec!["blog1"]);
        assert_eq!(ids("GENERALIZATION"), vec!["blog2"]);
        assert_eq!(ids("proctored"), vec!["blog3"]);
        assert!(ids("kubernetes").is_empty());
    }
}
