//! Canned reply generators, one per agent.
//!
//! Every responder is pure and total. The general and research responders
//! echo the prompt into the reply; the others return a fixed template.

/// Reply generator signature shared by all agents.
pub type Responder = fn(&str) -> String;

pub fn general(prompt: &str) -> String {
    format!(
        "Here is a thoughtful answer to your question:\n\n{prompt}\n\n\
         - I summarized the key points.\n\
         - I provided actionable steps.\n\n\
         If you'd like more depth, ask for examples."
    )
}

const CODE_REPLY: &str = concat!(
    "I drafted a code example and an optimization tip:\n\n",
    "```python\n# Example function\nfrom typing import List\n\n",
    "def unique_sorted(items: List[int]) -> List[int]:\n",
    "    # O(n log n) due to sort\n",
    "    return sorted(set(items))\n```\n\n",
    "Optimization: Prefer built-in data structures (set, dict) and avoid premature micro-opts.",
);

pub fn code(_prompt: &str) -> String {
    CODE_REPLY.to_string()
}

const AUTOMATION_REPLY: &str = concat!(
    "Here's a Selenium test outline you can adapt:\n\n",
    "```python\n",
    "from selenium import webdriver\n",
    "from selenium.webdriver.common.by import By\n",
    "from selenium.webdriver.common.keys import Keys\n\n",
    "with webdriver.Chrome() as d:\n",
    "    d.get('https://example.com')\n",
    "    d.find_element(By.ID, 'username').send_keys('user')\n",
    "    d.find_element(By.ID, 'password').send_keys('secret')\n",
    "    d.find_element(By.CSS_SELECTOR, 'button[type=submit]').click()\n",
    "    assert 'Dashboard' in d.title\n",
    "```\n\n",
    "Tip: Use data-testids for robust selectors.",
);

pub fn automation(_prompt: &str) -> String {
    AUTOMATION_REPLY.to_string()
}

pub fn research(prompt: &str) -> String {
    format!(
        "Plan → Gather → Synthesize → Answer\n\n\
         Plan:\n- Define scope and criteria\n- Identify sources\n\n\
         Answer draft:\n\
         - Key insights around: {prompt}\n\
         - Trade-offs and alternatives\n\
         - References to explore further"
    )
}

const DESIGN_REPLY: &str = concat!(
    "Design directions:\n\n",
    "- Visual: minimal, high-contrast, soft shadows\n",
    "- Components: cards, segmented controls, progress\n\n",
    "Example button style:\n\n",
    "```css\n",
    ".btn{padding:.75rem 1rem;border-radius:.75rem;",
    "background:linear-gradient(135deg,#6d5dfc,#3a8bff);color:#fff;font-weight:600;}\n",
    ".btn:hover{filter:brightness(1.05)}\n",
    "```",
);

pub fn design(_prompt: &str) -> String {
    DESIGN_REPLY.to_string()
}
