//! Static page text shown around the calculator.

pub const TITLE: &str = "Rent Affordability Calculator";

pub const SUBTITLE: &str =
    "Make informed decisions about your housing budget with our easy-to-use calculator";

pub const MODE_PROMPT: &str = "What would you like to calculate?";

pub const HOW_IT_WORKS_TITLE: &str = "How It Works";

pub const HOW_IT_WORKS: &str = "Our calculator uses the 30% rule of thumb for housing expenses. For required income, we multiply monthly rent by 30 to determine the recommended annual income. For affordable rent, we divide annual income by 30 to find the recommended monthly rent.";

pub const BENEFITS_TITLE: &str = "Benefits";

pub const BENEFITS: [&str; 4] = [
    "Make informed housing decisions",
    "Understand your budget limitations",
    "Plan your finances effectively",
    "Avoid overextending your budget",
];

pub const FAQ_TITLE: &str = "Frequently Asked Questions";

pub const DISCLAIMER: &str = "This calculator provides estimates for informational purposes only. Individual circumstances may vary, and we recommend consulting with a financial advisor for personalized advice.";
