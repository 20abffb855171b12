use super::super::seeder::{ChapterSpec, CurriculumSpec, RootSpec, SubcategorySpec};

/// Polity and economy ship as one domain: two roots in a single spec.
/// Economy declares its chapters directly on the root, so the seeder
/// synthesizes an "Economy - General" subcategory for them.
pub fn curriculum() -> CurriculumSpec {
    CurriculumSpec {
        domain: "polity-economy",
        roots: vec![
            RootSpec {
                name: "Polity",
                description: "Indian constitution and governance.",
                subcategories: vec![
                    SubcategorySpec {
                        name: "Indian Constitution",
                        chapters: vec![
                            ChapterSpec { name: "Historical Background", position: 1 },
                            ChapterSpec { name: "Preamble", position: 2 },
                            ChapterSpec { name: "Fundamental Rights", position: 3 },
                            ChapterSpec { name: "Directive Principles", position: 4 },
                        ],
                    },
                    SubcategorySpec {
                        name: "Governance",
                        chapters: vec![
                            ChapterSpec { name: "Union Executive", position: 1 },
                            ChapterSpec { name: "Parliament", position: 2 },
                            ChapterSpec { name: "Judiciary", position: 3 },
                            ChapterSpec { name: "Local Government", position: 4 },
                        ],
                    },
                ],
                chapters: vec![],
            },
            RootSpec {
                name: "Economy",
                description: "Indian economy fundamentals.",
                subcategories: vec![],
                chapters: vec![
                    ChapterSpec { name: "National Income", position: 1 },
                    ChapterSpec { name: "Money and Banking", position: 2 },
                    ChapterSpec { name: "Fiscal Policy", position: 3 },
                    ChapterSpec { name: "External Sector", position: 4 },
                ],
            },
        ],
    }
}
