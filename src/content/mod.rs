//! Static landing page content. Everything here is fixed at compile
//! time and rendered as-is.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub is_popular: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub tooltip: &'static str,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub designation: &'static str,
    pub src: &'static str,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HeroStat {
    pub label: &'static str,
    pub value: &'static str,
}

/// Each content list the site can render.
#[derive(clap::ValueEnum, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Pricing,
    Faq,
    Features,
    Testimonials,
    Marquee,
    Topics,
    Stats,
}

impl Section {
    /// Serialize the section's list as JSON
    pub fn to_json(self) -> serde_json::Value {
        let value = match self {
            Section::Pricing => serde_json::to_value(pricing_plans()),
            Section::Faq => serde_json::to_value(faq_items()),
            Section::Features => serde_json::to_value(features()),
            Section::Testimonials => serde_json::to_value(testimonials()),
            Section::Marquee => serde_json::to_value(marquee_images()),
            Section::Topics => serde_json::to_value(recent_topics()),
            Section::Stats => serde_json::to_value(hero_stats()),
        };
        // Plain structs of strings and bools always serialize
        value.unwrap_or(serde_json::Value::Null)
    }
}

pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Basic",
            price: "$29",
            period: "per month",
            description: "Perfect for individual investors",
            features: vec![
                "Market trend analysis",
                "Portfolio tracking",
                "Basic AI recommendations",
                "Email reports",
                "Mobile app access",
            ],
            is_popular: false,
        },
        PricingPlan {
            name: "Pro",
            price: "$79",
            period: "per month",
            description: "For serious investors looking to optimize returns",
            features: vec![
                "Everything in Basic",
                "Advanced AI predictions",
                "Portfolio optimization",
                "Risk management tools",
                "Weekly strategy reports",
                "API access",
            ],
            is_popular: true,
        },
        PricingPlan {
            name: "Enterprise",
            price: "Custom",
            period: "contact us",
            description: "For financial teams and organizations",
            features: vec![
                "Everything in Pro",
                "White-label solution",
                "Dedicated account manager",
                "Custom integrations",
                "Advanced data analytics",
                "Team collaboration tools",
            ],
            is_popular: false,
        },
    ]
}

pub fn faq_items() -> Vec<FaqItem> {
    vec![
        FaqItem {
            question: "How does the AI make investment recommendations?",
            answer: "Our AI analyzes millions of data points including market trends, company financials, economic indicators, and news sentiment. It then generates recommendations based on your risk profile, investment goals, and time horizon. The system continuously learns from market performance to improve its predictions over time.",
        },
        FaqItem {
            question: "Is my financial data secure on your platform?",
            answer: "Absolutely. We employ bank-level encryption and security practices. Your data is encrypted both in transit and at rest. We use multi-factor authentication, regular security audits, and never share your personal information with third parties without your explicit consent.",
        },
        FaqItem {
            question: "Can I connect my existing brokerage account?",
            answer: "Yes, we support integration with major brokerages through secure API connections. Once connected, you can view all your investments in one place and receive AI-powered recommendations specific to your current portfolio.",
        },
        FaqItem {
            question: "What if the AI recommendations don't perform well?",
            answer: "While our AI uses advanced algorithms to make predictions, all investments carry risk. We provide transparent performance metrics and confidence scores with each recommendation. You maintain full control over which recommendations to follow, and our platform includes educational resources to help you make informed decisions.",
        },
        FaqItem {
            question: "Do I need financial expertise to use this platform?",
            answer: "Not at all. Our platform is designed for users of all experience levels. Beginners will appreciate the educational resources and simplified interface, while experienced investors can dive into advanced analytics and customization options.",
        },
    ]
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Market Trend Analysis",
            description: "Real-time analysis of market trends with predictive insights to help you stay ahead of market movements.",
            tooltip: "Uses advanced pattern recognition to identify market trends before they become obvious to the average investor.",
        },
        Feature {
            title: "Portfolio Optimization",
            description: "AI-driven recommendations to optimize your portfolio allocation based on your risk tolerance and goals.",
            tooltip: "Balances your portfolio across sectors, asset classes, and risk levels to maximize returns while respecting your risk tolerance.",
        },
        Feature {
            title: "Investment Opportunities",
            description: "Discover hidden investment opportunities with our advanced pattern recognition algorithms.",
            tooltip: "Identifies undervalued assets and emerging market segments using a combination of technical and fundamental analysis.",
        },
        Feature {
            title: "Risk Assessment",
            description: "Comprehensive risk analysis to help you understand and mitigate potential downsides.",
            tooltip: "Calculates Value at Risk (VaR) and other risk metrics to quantify potential losses and suggest hedging strategies.",
        },
        Feature {
            title: "Financial Education",
            description: "Personalized learning resources to improve your financial literacy and investment knowledge.",
            tooltip: "Tailors educational content to your knowledge level and learning gaps, with interactive simulations to test strategies risk-free.",
        },
        Feature {
            title: "Wealth Growth Planning",
            description: "Long-term wealth growth strategies tailored to your personal financial situation and goals.",
            tooltip: "Simulates different investment scenarios over decades to help you plan for retirement, education funding, or other financial goals.",
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "The AI recommendations have increased my portfolio's performance by 32% in just six months. The market trend predictions are eerily accurate and have helped me stay ahead of major market movements.",
            name: "Alex Thompson",
            designation: "Angel Investor",
            src: "https://img.freepik.com/free-photo/young-bearded-man-with-striped-shirt_273609-5677.jpg",
        },
        Testimonial {
            quote: "As someone new to investing, this platform has been invaluable. It's like having a financial advisor that's available 24/7 with insights tailored to my goals and risk tolerance.",
            name: "Sarah Chen",
            designation: "Retail Investor",
            src: "https://img.freepik.com/free-photo/young-beautiful-woman-pink-warm-sweater-natural-look-smiling-portrait-isolated-long-hair_285396-896.jpg",
        },
        Testimonial {
            quote: "The risk assessment features have saved me from several potential losses. The AI catches patterns that even experienced investors might miss. I'm constantly impressed by how it analyzes multiple data sources.",
            name: "Michael Roberts",
            designation: "Portfolio Manager",
            src: "https://img.freepik.com/free-photo/bohemian-man-with-his-arms-crossed_1368-3542.jpg",
        },
        Testimonial {
            quote: "I've been able to diversify my investments more effectively with the AI's sector analysis. The platform identified opportunities I would have never considered on my own. Truly game-changing technology.",
            name: "Jessica Wong",
            designation: "Financial Analyst",
            src: "https://img.freepik.com/free-photo/young-beautiful-woman-smart-casual-wear-glasses-holding-laptop-looking-confident_176420-11857.jpg",
        },
    ]
}

pub fn marquee_images() -> Vec<&'static str> {
    vec![
        "https://img.freepik.com/free-photo/advanced-technological-robot-interacting-with-money-finance_23-2151612687.jpg",
        "https://th.bing.com/th/id/OIP.LKZGtfAG5cEGGqlUgY8Q-QHaEx?rs=1&pid=ImgDetMain",
        "https://th.bing.com/th/id/OIP.x-Q5LhRW1k0agDwNhz6QHQHaD4?w=600&h=315&rs=1&pid=ImgDetMain",
        "https://www.financewhile.com/wp-content/uploads/2023/04/AI-and-forex-trading-in-UAE-opportunities-and-challenges.jpg",
    ]
}

/// Topics listed under "Recent Conversations" in the chat sidebar
pub fn recent_topics() -> Vec<&'static str> {
    vec![
        "Retirement Planning",
        "Stock Market Analysis",
        "Tax Optimization",
        "Real Estate Investment",
    ]
}

/// Headline figures shown under the hero banner
pub fn hero_stats() -> Vec<HeroStat> {
    vec![
        HeroStat {
            label: "Active Users",
            value: "25,000+",
        },
        HeroStat {
            label: "Average ROI",
            value: "21.6%",
        },
        HeroStat {
            label: "Markets Covered",
            value: "30+",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_popular_plan() {
        let popular: Vec<_> = pricing_plans().into_iter().filter(|p| p.is_popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Pro");
    }

    #[test]
    fn test_section_json_lengths() {
        let len = |s: Section| s.to_json().as_array().map(|a| a.len());
        assert_eq!(len(Section::Pricing), Some(3));
        assert_eq!(len(Section::Faq), Some(5));
        assert_eq!(len(Section::Features), Some(6));
        assert_eq!(len(Section::Testimonials), Some(4));
        assert_eq!(len(Section::Marquee), Some(4));
        assert_eq!(len(Section::Topics), Some(4));
        assert_eq!(len(Section::Stats), Some(3));
    }

    #[test]
    fn test_pricing_plan_json_shape() {
        let json = Section::Pricing.to_json();
        assert_eq!(json[1]["name"], "Pro");
        assert_eq!(json[1]["is_popular"], true);
        assert_eq!(json[0]["features"][0], "Market trend analysis");
    }

    #[test]
    fn test_hero_stats_json_shape() {
        let json = Section::Stats.to_json();
        assert_eq!(json[0]["label"], "Active Users");
        assert_eq!(json[0]["value"], "25,000+");
        assert_eq!(json[1]["value"], "21.6%");
    }
}
