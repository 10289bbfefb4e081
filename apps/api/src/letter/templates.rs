// Cover letter template constants.
// Replace `{role}` and `{company}` before use.

/// Shown instead of a letter until a job description is supplied.
pub const PLACEHOLDER: &str = "Paste a job description to generate a tailored cover letter.";

/// Fixed interpolations; the job description is not parsed for these.
pub const COMPANY_PLACEHOLDER: &str = "[Company Name]";
pub const ROLE_TITLE: &str = "Senior Project Manager (Data Centres)";

pub const GREETING: &str = "Dear Hiring Manager,";

pub const SIGN_OFF: &str = "Yours faithfully,\n\n[Your Name]";

pub const PROFESSIONAL_INTRO: &str = "I\u{2019}m writing to apply for the {role} position at {company}. I offer strong project delivery experience, rigorous organisation, and a practical approach to stakeholder alignment and reporting.";

pub const PROFESSIONAL_BODY: &str = "The role calls for strong end-to-end project delivery, contractor management, and coordination with MEP stakeholders. I\u{2019}m highly organised, comfortable leading multiple workstreams, and disciplined on planning, reporting, and risk management.

I would bring:
- A structured delivery approach (milestones, risks, actions, reporting cadence)
- Strong stakeholder management and clear communication
- A practical, outcomes-focused mindset

Thank you for your consideration. I\u{2019}d welcome the opportunity to discuss the role further.";

pub const CONCISE_INTRO: &str = "I\u{2019}m applying for the {role} role at {company}. I bring proven delivery leadership across complex, time-critical projects, with strong stakeholder management and structured reporting.";

pub const CONCISE_BODY: &str = "From the role description, you need someone who can manage programme, budget, contractors and MEP coordination. I work well in fast-paced environments, building clear plans, managing risks, and keeping teams aligned.

I\u{2019}m particularly strong in:
- Establishing delivery cadence (weekly reporting, risk logs, action tracking)
- Managing suppliers and change control
- Communicating clearly with technical and non-technical stakeholders

I\u{2019}d welcome the opportunity to discuss how I can support your delivery outcomes.";

pub const CONFIDENT_INTRO: &str = "I\u{2019}m excited to apply for the {role} role at {company}. I have a track record of leading complex programmes with clear governance, decisive problem-solving, and consistent delivery against time, cost, and quality.";

pub const CONFIDENT_BODY: &str = "Your requirements align closely with my strengths: structured programme control, supplier management, and stakeholder-facing delivery leadership. I build momentum quickly, set clear governance, and drive accountability\u{2014}especially when timelines are tight and priorities compete.

Highlights I would bring:
- Clear delivery governance: RAID, milestones, change control
- Contractor and supplier management with pragmatic escalation
- Strong communication across technical MEP teams and business stakeholders

I would value the chance to walk you through how I operate in live delivery environments and how I would add value from day one.";
