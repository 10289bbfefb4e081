//! Built-in sample texts used to pre-populate the demo inputs.
//!
//! These are static data, not configuration. The matcher also falls back to
//! `SAMPLE_CV` when no CV text has been supplied.

use serde::Serialize;

use crate::letter::tone::Tone;

pub const SAMPLE_CV: &str = "CHRIS SINCLAIR

M&E / Data Centre Recruitment | Executive Search

SUMMARY
Recruitment specialist focused on senior M&E professionals across data centres, construction and energy. Experienced in building new divisions, market mapping and talent intelligence.

EXPERIENCE
Executive Search Consultant \u{2014} Samuel Knight (Data Centres)
- Built a new sector desk focused on senior M&E and project delivery hires
- Delivered shortlists across PM, CM, HSE, design engineering

EDUCATION
Business & Management

SKILLS
Stakeholder management, market mapping, talent intelligence, client advisory
";

pub const SAMPLE_JOB_DESCRIPTION: &str = "Senior Project Manager \u{2014} Data Centres (UK)

Responsibilities:
- Lead end-to-end delivery of data centre build projects
- Manage programme, budget, procurement and contractors
- Drive H&S compliance and reporting
- Coordinate MEP design and commissioning activities

Requirements:
- Strong project management background in mission critical / data centres
- Familiar with MEP systems, commissioning, change control
- Excellent stakeholder management
- NEC / JCT contract experience preferred
";

#[derive(Debug, Clone, Serialize)]
pub struct Samples {
    pub cv_text: &'static str,
    pub job_text: &'static str,
    /// Options for the cover letter tone selector.
    pub tones: [Tone; 3],
}

pub fn samples() -> Samples {
    Samples {
        cv_text: SAMPLE_CV,
        job_text: SAMPLE_JOB_DESCRIPTION,
        tones: Tone::ALL,
    }
}
