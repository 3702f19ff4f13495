//! Canned replies the simulated advisor chooses from.
use anyhow::{Result, bail};
use rand::Rng;

pub const DEFAULT_REPLIES: [&str; 5] = [
    "Based on current market trends, I recommend diversifying your portfolio with at least 20% allocated to technology stocks. Companies focusing on AI and cloud solutions show particularly strong growth potential. Consider ETFs that track the sector if you prefer lower risk exposure.",
    "For your retirement goals, a mix of 60% stocks and 40% bonds would balance growth and stability. Consider index funds with low expense ratios to maximize returns over time. Based on your timeline, increasing your monthly contributions by 15% would significantly improve your projected retirement income.",
    "The housing market is showing signs of cooling in urban areas. If you're planning to invest in real estate, consider emerging suburban markets with strong job growth and infrastructure development. Multi-family properties in these regions are showing particularly strong returns on investment.",
    "Your current debt-to-income ratio is higher than recommended. I suggest prioritizing the repayment of high-interest debt before increasing your investment contributions. Creating a debt snowball plan could help you eliminate these obligations 30% faster.",
    "Based on the information provided, you could optimize your tax strategy by increasing contributions to your 401(k) and considering a health savings account (HSA) for additional tax-advantaged savings. This approach could potentially reduce your tax liability by up to $3,500 annually.",
];

/// Fixed, non-empty list of replies. Never mutated after construction.
#[derive(Clone, Debug)]
pub struct ReplyCorpus(Vec<String>);

impl ReplyCorpus {
    pub fn new(replies: Vec<String>) -> Result<Self> {
        if replies.is_empty() {
            bail!("Reply corpus must contain at least one reply");
        }
        Ok(Self(replies))
    }

    pub fn replies(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, reply: &str) -> bool {
        self.0.iter().any(|r| r == reply)
    }

    /// Uniform pick. Every call is an independent draw so the same
    /// reply can come up twice in a row.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.0[rng.gen_range(0..self.0.len())]
    }
}

impl Default for ReplyCorpus {
    fn default() -> Self {
        Self(DEFAULT_REPLIES.iter().map(|r| r.to_string()).collect())
    }
}
