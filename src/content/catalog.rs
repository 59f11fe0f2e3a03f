//! Static site copy: project case studies and skill deep-dives

/// One entry of a static content table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentEntry {
    pub id: &'static str,
    pub title: &'static str,
    /// Trusted HTML authored with the site
    pub content: &'static str,
}

pub const PROJECTS: &[ContentEntry] = &[
    ContentEntry {
        id: "faq",
        title: "Automated FAQ Generator (Case Study)",
        content: r#"<p><strong>The Challenge:</strong> A mid-sized e-commerce client was spending 15 hours/week manually drafting replies to repetitive support questions, leading to slow response times and employee burnout.</p><p><strong>The SynthFlow Solution:</strong> I built a custom Gemini-powered chatbot integrated directly into their internal knowledge base. The key was expert Prompt Engineering to ensure accurate, on-brand, and empathetic responses, significantly reducing the "robotic" feel.</p><p><strong>The Outcome:</strong> Support team workload was reduced by 60%, and customer satisfaction scores increased by 8% due to faster, high-quality responses. This is a perfect example of automating a high-volume, low-complexity process to reduce user error and save time.</p><p class="text-cyan-400 font-bold mt-4">Technologies Used: Gemini API, custom Python backend, Slack/Intercom API (Vibe Code).</p>"#,
    },
    ContentEntry {
        id: "data-sync",
        title: "Multi-System Data Synchronization (Case Study)",
        content: r#"<p><strong>The Challenge:</strong> A legacy manufacturing system needed to share inventory and order data with a modern cloud-based CRM. Employees were manually copying data between the two systems daily, resulting in frequent (and expensive) transposition errors.</p><p><strong>The SynthFlow Solution:</strong> Using Vibe Code and light Python scripting, I established a secure, real-time API connection between the two systems. The custom integration included data validation checks to ensure zero errors during transit.</p><p><strong>The Outcome:</strong> Data entry errors related to this process were eliminated (100% reduction). The time saved from manual input was reallocated to strategic planning. This project demonstrates complex integration using minimal, efficient code.</p><p class="text-cyan-400 font-bold mt-4">Technologies Used: Zapier/Make (Vibe Code), REST APIs, JavaScript functions for data cleaning).</p>"#,
    },
    ContentEntry {
        id: "inventory",
        title: "Vibe-Coded Inventory Monitor (Case Study)",
        content: r#"<p><strong>The Challenge:</strong> A small retail manager kept forgetting to manually check inventory sheets and often missed reorder deadlines, leading to stockouts.</p><p><strong>The SynthFlow Solution:</strong> I created a scheduled script that reads the inventory spreadsheet daily. When stock drops below a threshold, it uses a Prompt Engineered call to draft a personalized, urgent reorder email to the supplier, complete with a polite, professional tone.</p><p><strong>The Outcome:</strong> Stockouts were virtually eliminated, protecting revenue. The manager gained peace of mind and only needed to review and click 'Send.' This is automation as an invisible, helpful assistant, with zero user error.</p><p class="text-cyan-400 font-bold mt-4">Technologies Used: Google Sheets API, Gmail API, Gemini API (for email drafting), Node.js for scheduling).</p>"#,
    },
];

pub const SKILLS: &[ContentEntry] = &[
    ContentEntry {
        id: "prompt-engineering",
        title: "Deep Dive: Prompt Engineering",
        content: r#"<p class="font-semibold text-white">The AI Whisperer.</p>
<p>I engineer highly specific instructions to ensure LLMs deliver reliable, production-ready output, every single time. Key deliverables include Structured Output (guaranteed JSON/XML for system ingestion) and Grounding Control (reducing hallucinations).</p>
<p class="text-cyan-400 font-bold mt-3">Value: Turns unpredictable AI tools into reliable, repeatable business assets.</p>"#,
    },
    ContentEntry {
        id: "vibe-code",
        title: "Deep Dive: Vibe Code & APIs",
        content: r#"<p class="font-semibold text-white">The Connector.</p>
<p>Vibe Code is the art of connecting platforms without heavy, custom backend development. I build bridges between CRMs, financial tools, and custom scripts using low-code orchestration (Zapier/Make) and direct API calls.</p>
<p class="text-cyan-400 font-bold mt-3">Value: Achieve high-level automation quickly and affordably, leveraging the tools you already pay for.</p>"#,
    },
    ContentEntry {
        id: "full-stack",
        title: "Deep Dive: Full-Stack Coding",
        content: r#"<p class="font-semibold text-white">The Custom Builder.</p>
<p>When off-the-shelf tools aren't enough, I build custom solutions from the ground up: Python for data cleaning and scheduled tasks, JavaScript for custom web apps, and Firestore for secure, scalable data storage.</p>
<p class="text-cyan-400 font-bold mt-3">Value: Complete flexibility to tackle any technical challenge, ensuring long-term scalability.</p>"#,
    },
];

fn find(table: &'static [ContentEntry], id: &str) -> Option<&'static ContentEntry> {
    table.iter().find(|entry| entry.id == id)
}

pub fn project(id: &str) -> Option<&'static ContentEntry> {
    find(PROJECTS, id)
}

pub fn skill(id: &str) -> Option<&'static ContentEntry> {
    find(SKILLS, id)
}
