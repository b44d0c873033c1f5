//! Fixed list of project categories offered by the admin project form

/// Project categories, in the order the admin form lists them
pub const PROJECT_CATEGORIES: [&str; 21] = [
    "Spotlight on Children",
    "Responsible Consumption & Waste Management",
    "Nutrition and Food Safety",
    "Peace, Religious & Cultural Activities",
    "Sports & Recreation",
    "Health & Wellbeing",
    "Senior Citizens Development",
    "Helping Hand to Differently Abled",
    "Public Relations",
    "Fundraiser",
    "Quality Education & Literacy",
    "Women Empowerment",
    "Poverty & Better Life",
    "Clean Water & Energy Conservation",
    "Crime & Accident Prevention",
    "Infrastructure Development",
    "Research and Development",
    "Drug Prevention and Rehabilitation",
    "Wildlife & Life Below Water",
    "Fellowship",
    "Betterment of Leoism",
];

/// Check whether a category is one of the fixed labels
pub fn is_known_category(category: &str) -> bool {
    PROJECT_CATEGORIES.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("Fellowship"));
        assert!(is_known_category("Peace, Religious & Cultural Activities"));
        assert!(!is_known_category("fellowship"));
        assert!(!is_known_category("Community"));
    }
}
