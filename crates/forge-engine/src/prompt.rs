//! Prompt construction for team analysis.

use std::collections::BTreeMap;

use forge_core::entities::Team;

/// `Name [id]` when the tag resolved, otherwise the bare id.
fn tag_label(tag_id: &str, names: &BTreeMap<String, String>) -> String {
    names
        .get(tag_id)
        .map_or_else(|| tag_id.to_string(), |name| format!("{name} [{tag_id}]"))
}

/// Build the analysis prompt from the team's recorded snapshot.
///
/// Member skills come from the team record, never from the live user pool.
#[must_use]
pub fn build_analysis_prompt(team: &Team, tag_names: &BTreeMap<String, String>) -> String {
    let resolved: Vec<&str> = team
        .required_tag_ids
        .iter()
        .filter_map(|id| tag_names.get(id).map(String::as_str))
        .collect();

    let mut members = String::new();
    for member in &team.members {
        let skills: Vec<String> = member
            .skill_tags
            .iter()
            .map(|skill| {
                let label = tag_label(&skill.tag_id, tag_names);
                match &skill.level {
                    Some(level) => format!("{label} ({level})"),
                    None => label,
                }
            })
            .collect();
        let skills = if skills.is_empty() {
            String::from("none declared")
        } else {
            skills.join(", ")
        };
        members.push_str(&format!(
            "   - {} <{}> (id: {}); skills: {}\n",
            member.name, member.email, member.id, skills
        ));
    }

    format!(
        "You are an expert in team skill analysis. Analyze the following team:\n\
         1. Project name: {project}\n\
         2. Required skill tags: {names} (IDs: {ids})\n\
         3. Team size: {count}\n\
         4. Team members:\n{members}\n\
         Structure your analysis as follows:\n\
         1. Skill match summary: assess whether the team's skills meet the project \
         requirements and give a percentage score;\n\
         2. Strengths: the team's core skill strengths;\n\
         3. Gaps: missing key skills or problems in skill distribution;\n\
         4. Recommendations: concrete staffing or upskilling suggestions that address the gaps.\n",
        project = team.project_name,
        names = if resolved.is_empty() {
            String::from("(none resolved)")
        } else {
            resolved.join(", ")
        },
        ids = team.required_tag_ids.join(", "),
        count = team.member_count,
    )
}
