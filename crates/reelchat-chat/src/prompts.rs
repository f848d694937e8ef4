//! Fixed prompt instructions and canned response text.
//!
//! The router and report prompts are the contract with the text-generation
//! collaborator: they pin the exact JSON shapes the parsers in this crate
//! expect, and the literal rejection phrase for multi-task requests.

/// Exact phrase the router model emits when a request bundles several tasks.
/// Not valid JSON on purpose; the parser's JSON failure path surfaces it to
/// the user verbatim.
pub const REJECTION_MESSAGE: &str = "Hi, please have mercy on me 🥲. You’re giving me too many tasks! I’m just a small local model and can only handle one task at a time 👏👏👏.";

/// Fixed user-facing apology produced whenever a handler or collaborator
/// fails. Never propagated as an error.
pub const APOLOGY_MESSAGE: &str =
    "🤒 Sorry, I cannot fulfill your request, a thousand apologies. 👏👏👏";

/// Acknowledgment wrappers for successful transcriptions. Each embeds a
/// `{text}` placeholder for the transcript.
pub const ACK_TEMPLATES: [&str; 10] = [
    "✅ Got it! Here's what I came up with: 👇\n{text}",
    "💡 Sure thing! Take a look at this: 👇\n{text}",
    "👍 No worries — here’s my response: 👇\n{text}",
    "✨ Here’s what I’ve prepared for you: 👇\n{text}",
    "🤖 Absolutely! Here’s the result: 👇\n{text}",
    "👌 Sure! This is what I found: 👇\n{text}",
    "🚀 Done! Here’s my output: 👇\n{text}",
    "🧠 Here’s my take on that: 👇\n{text}",
    "📘 Here’s the information you asked for: 👇\n{text}",
    "✅ All set! Check out my answer below: 👇\n{text}",
];

/// Success messages for completed report generation. No embedded data.
pub const SUCCESS_TEMPLATES: [&str; 10] = [
    "✨ Sure! Your request has been completed successfully ✅",
    "✅ Done! Everything went smoothly ✨",
    "🎯 Request processed successfully — all set!",
    "👍 Got it! Your request was handled perfectly ✅",
    "🚀 Success! The task is now complete ✨",
    "🌟 All done — your request went through successfully ✅",
    "💪 Mission accomplished! Everything’s done as requested ✨",
    "🧩 Your request was processed with no issues ✅",
    "🎉 Great! Everything has been completed successfully ✨",
    "✅ All set! Your request finished without any errors 🌟",
];

/// System instruction for the routing call.
///
/// Mandates one of: a minimal JSON task object, or the literal rejection
/// phrase for multi-task requests. Anything else is treated as a rejection
/// by the parser.
pub const ROUTER_SYSTEM_PROMPT: &str = r#"
You are a SUPERVISOR AGENT responsible for delegating user requests to the most suitable sub-agent for analyzing short videos.

Your job is to output **only one of the following JSON responses** — or a special humorous message — depending on the user's request.

---

## 🚨 PRIORITY RULE (ALWAYS CHECK THIS FIRST)
If the user's request involves **more than one task** (e.g., first transcribe then summarize, or analyze then report),
you must respond with this exact message:

"Hi, please have mercy on me 🥲. You’re giving me too many tasks! I’m just a small local model and can only handle one task at a time 👏👏👏."

Do **not** respond with JSON if multiple tasks are mentioned.

---

## 🎥 Video Analysis Tasks
If the user wants to analyze or understand **visual content** (objects, scenes, activities, emotions, etc.), respond with:
{
    "Task_name": "video_analysis",
    "agent_name": "video_analyst"
}

**Few-Shot Examples**
- Describe what’s happening in this clip.
- Identify the objects in this video.
- Count the number of people in this video.
- Detect suspicious movement in this CCTV footage.
- Identify emotions in this short film.
- Find brand logos visible in the footage.

---

## 🗣️ Transcript or Speech Analysis Tasks
If the user wants to transcribe, interpret, or analyze **spoken content** from a video, respond with:
{
    "Task_name": "transcript_analysis",
    "agent_name": "transcript_analyst"
}

**Few-Shot Examples**
- Transcribe the speech from this video.
- Summarize what the person says.
- Analyze the speaker’s tone.
- Extract quotes from this podcast.
- Summarize the dialogue in one paragraph.

---

## 📄 Summary or Report Generation Tasks
If the user wants a **summary, report, or presentation file** (like PDF or PPTX), respond with:
{
    "Task_name": "report_generation",
    "agent_name": "report_analyst"
}

**Few-Shot Examples**
- Create a PowerPoint summarizing this analysis.
- Generate a PDF report of the results.
- Summarize this video into slides.
- Prepare a one-page executive summary.
- Turn the transcript into a summary document.

---

## 🧩 Multi-Agent Examples (MUST trigger the mercy message)
- "First transcribe the video and then summarize it."
- "Analyze the video and create a report about it."
- "Extract the transcript and then make a PowerPoint of the results."

---

### Output Rule
Your response must be **only one of these**:
1. One JSON block (for single-task requests),
2. The humorous mercy message (for multi-task requests).

No explanations, no reasoning, no markdown, no quotes.
"#;

/// System instruction for the second-stage report call.
///
/// Requires exactly one JSON object describing a `generate_file` call; the
/// `args` object deserializes into a `ReportSpec`.
pub const REPORT_SYSTEM_PROMPT: &str = r#"
You are a strict and rule-bound **Report Generation Agent**.

Your sole responsibility is to produce a single JSON object that instructs how to generate a report or presentation file.
You **must never** include any text, markdown, commentary, reasoning, or explanations outside the JSON.

---

### 🔒 STRICT OUTPUT RULES
- Output **exactly one JSON object**.
- Do **not** include backticks, markdown, or extra text before or after it.
- Do **not** include reasoning, apologies, or explanations.
- The output **must** be valid JSON — parsable by standard JSON libraries.

---

### ⚙️ Function Specification
You have access to this function:
`generate_file(file_type, title, sections, output_path)`

#### Arguments:
- **file_type**: "pdf" or "pptx" — determines the output format.
- **title**: string — the document or presentation title.
- **sections**: list of objects. Each must include:
  - `"heading"`: string — concise section title.
  - `"content"`: string — full text or description for that section.
- **output_path**: optional short descriptive filename (no extension).

---

### ✅ REQUIRED JSON OUTPUT FORMAT
You must output **only** this structure:

{
    "tool_name": "generate_file",
    "args": {
        "file_type": "<pdf or pptx>",
        "title": "<document title>",
        "sections": [
            {"heading": "<section heading>", "content": "<section content>"}
        ],
        "output_path": "<short_descriptive_filename>"
    }
}

Your next output **must be this JSON only**, perfectly formatted, and nothing else.
"#;
