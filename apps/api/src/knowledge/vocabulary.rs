/// Technology terms looked for in job descriptions (substring match).
pub const TECH_KEYWORDS: &[&str] = &[
    "react",
    "vue",
    "angular",
    "node.js",
    "python",
    "java",
    "javascript",
    "typescript",
    "html",
    "css",
    "sql",
    "mongodb",
    "postgresql",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "api",
    "rest",
    "graphql",
    "agile",
    "scrum",
    "ci/cd",
    "testing",
    "jest",
    "cypress",
    "tensorflow",
    "pytorch",
    "machine learning",
    "data analysis",
    "excel",
    "tableau",
    "power bi",
];

/// Résumé skill tags grouped by category (whole-word match).
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "languages",
        &[
            "Python",
            "Java",
            "JavaScript",
            "TypeScript",
            "C++",
            "C#",
            "Ruby",
            "Go",
            "Rust",
            "PHP",
            "Swift",
            "Kotlin",
        ],
    ),
    (
        "frameworks",
        &[
            "React", "Angular", "Vue", "Node.js", "Express", "Django", "Flask", "Spring",
            "Laravel",
        ],
    ),
    (
        "markup",
        &["HTML", "CSS", "Sass", "Tailwind", "Bootstrap", "Material UI"],
    ),
    (
        "databases",
        &[
            "MongoDB",
            "PostgreSQL",
            "MySQL",
            "Redis",
            "Cassandra",
            "DynamoDB",
        ],
    ),
    (
        "cloud",
        &[
            "AWS",
            "Azure",
            "GCP",
            "Docker",
            "Kubernetes",
            "Jenkins",
            "Git",
            "CI/CD",
        ],
    ),
    (
        "ml",
        &[
            "Machine Learning",
            "Deep Learning",
            "NLP",
            "TensorFlow",
            "PyTorch",
            "Scikit-learn",
        ],
    ),
    ("api", &["REST API", "GraphQL", "Microservices", "WebSocket"]),
    ("data", &["SQL", "NoSQL", "Database", "ETL", "Data Analysis"]),
];
