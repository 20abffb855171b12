use super::super::seeder::{ChapterSpec, CurriculumSpec, RootSpec, SubcategorySpec};

pub fn curriculum() -> CurriculumSpec {
    CurriculumSpec {
        domain: "history",
        roots: vec![RootSpec {
            name: "History",
            description: "Ancient, medieval and modern Indian history with art and culture.",
            subcategories: vec![
                SubcategorySpec {
                    name: "Ancient India",
                    chapters: vec![
                        ChapterSpec { name: "Indus Valley Civilisation", position: 1 },
                        ChapterSpec { name: "Vedic Age", position: 2 },
                        ChapterSpec { name: "Mauryan Empire", position: 3 },
                        ChapterSpec { name: "Gupta Period", position: 4 },
                    ],
                },
                SubcategorySpec {
                    name: "Medieval India",
                    chapters: vec![
                        ChapterSpec { name: "Delhi Sultanate", position: 1 },
                        ChapterSpec { name: "Mughal Empire", position: 2 },
                        ChapterSpec { name: "Vijayanagara and Bahmani Kingdoms", position: 3 },
                    ],
                },
                SubcategorySpec {
                    name: "Modern India",
                    chapters: vec![
                        ChapterSpec { name: "Advent of Europeans", position: 1 },
                        ChapterSpec { name: "Revolt of 1857", position: 2 },
                        ChapterSpec { name: "Indian National Movement", position: 3 },
                        ChapterSpec { name: "Gandhian Era", position: 4 },
                    ],
                },
                SubcategorySpec {
                    name: "Art and Culture",
                    chapters: vec![
                        ChapterSpec { name: "Architecture", position: 1 },
                        ChapterSpec { name: "Performing Arts", position: 2 },
                        ChapterSpec { name: "Literature", position: 3 },
                    ],
                },
            ],
            chapters: vec![],
        }],
    }
}
