//! Static vocabulary tables: skill catalog, soft skills, section synonyms and
//! the interview question bank.
//!
//! Order inside every table is significant. Category order and skill order
//! decide output order and which questions survive the cap.

/// Technical skill category, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Languages,
    Web,
    Backend,
    Frontend,
    Mobile,
    Database,
    Devops,
    Ai,
    Architecture,
    Testing,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Web => "web",
            SkillCategory::Backend => "backend",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Mobile => "mobile",
            SkillCategory::Database => "database",
            SkillCategory::Devops => "devops",
            SkillCategory::Ai => "ai",
            SkillCategory::Architecture => "architecture",
            SkillCategory::Testing => "testing",
        }
    }
}

/// Canonical section a résumé header can be normalized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionName {
    Skills,
    Experience,
    Projects,
    Education,
}

impl SectionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Skills => "skills",
            SectionName::Experience => "experience",
            SectionName::Projects => "projects",
            SectionName::Education => "education",
        }
    }
}

/// Categories whose skills may produce interview questions, in priority order.
pub const QUESTION_CATEGORIES: &[SkillCategory] = &[
    SkillCategory::Languages,
    SkillCategory::Backend,
    SkillCategory::Frontend,
    SkillCategory::Database,
    SkillCategory::Architecture,
];

/// Categories flattened into `tools_frameworks`, in output order.
pub const TOOL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory::Web,
    SkillCategory::Devops,
    SkillCategory::Testing,
];

pub const SKILL_CATALOG: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Languages,
        &[
            "Python",
            "Java",
            "Kotlin",
            "C++",
            "C#",
            "C",
            "Go",
            "Rust",
            "Swift",
            "PHP",
            "Ruby",
            "JavaScript",
            "TypeScript",
        ],
    ),
    (SkillCategory::Web, &["HTML", "CSS", "Tailwind", "Bootstrap"]),
    (
        SkillCategory::Backend,
        &[
            "Django",
            "Flask",
            "FastAPI",
            "Spring Boot",
            "Express",
            "Node.js",
            "Laravel",
            "ASP.NET",
        ],
    ),
    (
        SkillCategory::Frontend,
        &["React", "Angular", "Vue", "Next.js"],
    ),
    (
        SkillCategory::Mobile,
        &[
            "Android",
            "Jetpack Compose",
            "Retrofit",
            "Flutter",
            "React Native",
        ],
    ),
    (
        SkillCategory::Database,
        &["MySQL", "PostgreSQL", "MongoDB", "SQLite", "Firebase", "Redis"],
    ),
    (
        SkillCategory::Devops,
        &[
            "AWS",
            "Azure",
            "GCP",
            "Docker",
            "Kubernetes",
            "CI/CD",
            "GitHub Actions",
        ],
    ),
    (
        SkillCategory::Ai,
        &[
            "Machine Learning",
            "Deep Learning",
            "TensorFlow",
            "PyTorch",
            "Pandas",
            "NumPy",
            "Scikit-learn",
        ],
    ),
    (
        SkillCategory::Architecture,
        &["System Design", "Microservices", "REST API", "GraphQL"],
    ),
    (
        SkillCategory::Testing,
        &["JUnit", "Mockito", "Selenium", "Cypress"],
    ),
];

pub const SOFT_SKILLS: &[&str] = &[
    "Communication",
    "Leadership",
    "Teamwork",
    "Problem Solving",
    "Critical Thinking",
    "Adaptability",
    "Time Management",
    "Creativity",
    "Collaboration",
    "Attention to Detail",
];

pub const SECTION_SYNONYMS: &[(SectionName, &[&str])] = &[
    (
        SectionName::Skills,
        &[
            "skills",
            "skills & strengths",
            "skills and strengths",
            "core competencies",
            "technical skills",
            "technical expertise",
            "professional skills",
            "technical summary",
            "key skills",
            "areas of expertise",
            "competencies",
        ],
    ),
    (
        SectionName::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment history",
            "career history",
            "work history",
        ],
    ),
    (
        SectionName::Projects,
        &[
            "projects",
            "academic projects",
            "personal projects",
            "key projects",
            "project experience",
        ],
    ),
    (
        SectionName::Education,
        &[
            "education",
            "academic background",
            "qualifications",
            "academic qualifications",
        ],
    ),
];

pub const QUESTION_BANK: &[(&str, &[&str])] = &[
    ("Python", &[
        "Explain your experience with Python and describe the projects you built with it.",
        "Which Python frameworks or libraries have you used, and what were your reasons for choosing them?",
    ]),
    ("Java", &[
        "Describe a Java project you worked on and the design patterns you applied.",
        "How do you manage memory and performance in a Java application?",
    ]),
    ("Kotlin", &[
        "What advantages does Kotlin offer over Java for Android development?",
        "Describe how you use Kotlin coroutines for asynchronous programming.",
    ]),
    ("C++", &[
        "Explain memory management in C++ and how you avoid common pitfalls.",
        "How do you handle multi-threading safely in C++?",
    ]),
    ("C#", &[
        "Describe your experience with the .NET ecosystem using C#.",
        "How do you apply SOLID principles in a C# project?",
    ]),
    ("C", &[
        "Explain pointer arithmetic and how it differs from higher-level languages.",
        "How do you manage dynamic memory allocation in C?",
    ]),
    ("Go", &[
        "What makes Go well-suited for concurrent systems?",
        "Describe a service you built using Go and the challenges you faced.",
    ]),
    ("Rust", &[
        "Explain Rust's ownership model and how it prevents memory errors.",
        "When would you choose Rust over C++ for a systems project?",
    ]),
    ("Swift", &[
        "How does Swift's optional system improve safety compared to Objective-C?",
        "Describe your experience building an iOS application with Swift.",
    ]),
    ("PHP", &[
        "How do you structure a scalable PHP application?",
        "Explain how you secure a PHP application against SQL injection and XSS.",
    ]),
    ("Ruby", &[
        "What makes Ruby on Rails productive for web development?",
        "How do you test a Ruby application effectively?",
    ]),
    ("JavaScript", &[
        "Explain the event loop and how asynchronous JavaScript works.",
        "How do you manage state in a large JavaScript application?",
    ]),
    ("TypeScript", &[
        "How does TypeScript's type system improve large codebase maintainability?",
        "Describe a scenario where strict TypeScript types caught a runtime bug early.",
    ]),
    ("Django", &[
        "How would you design a REST API using Django REST Framework?",
        "How does Django's ORM differ from raw SQL queries?",
    ]),
    ("Flask", &[
        "Describe the architecture of a Flask application you built.",
        "How do you handle authentication and authorisation in Flask?",
    ]),
    ("FastAPI", &[
        "How does FastAPI's dependency injection system work?",
        "Why would you choose FastAPI over Flask for a new project?",
    ]),
    ("Spring Boot", &[
        "Explain how Spring Boot auto-configuration works.",
        "How do you secure a Spring Boot REST API?",
    ]),
    ("Express", &[
        "How do you structure middleware in an Express application?",
        "Describe how you handle errors globally in Express.",
    ]),
    ("Node.js", &[
        "How does Node.js handle concurrency without multiple threads?",
        "When should you use Node.js over a multi-threaded server?",
    ]),
    ("Laravel", &[
        "Describe the request lifecycle in a Laravel application.",
        "How do you use Eloquent ORM to handle complex relationships?",
    ]),
    ("ASP.NET", &[
        "How does ASP.NET Core's middleware pipeline work?",
        "Explain how dependency injection is configured in ASP.NET Core.",
    ]),
    ("React", &[
        "Explain the virtual DOM and how React's reconciliation works.",
        "How do you manage global state in a React application?",
    ]),
    ("Angular", &[
        "Describe Angular's component lifecycle hooks and when you use them.",
        "How does Angular's dependency injection differ from other frameworks?",
    ]),
    ("Vue", &[
        "How does Vue's reactivity system work?",
        "Describe how you would structure a large-scale Vue application.",
    ]),
    ("Next.js", &[
        "Explain the difference between SSR and SSG in Next.js.",
        "How does Next.js improve SEO for a React application?",
    ]),
    ("MySQL", &[
        "Can you walk me through optimising a slow MySQL query?",
        "Explain the difference between INNER JOIN, LEFT JOIN, and RIGHT JOIN.",
    ]),
    ("PostgreSQL", &[
        "What PostgreSQL-specific features have you used and why?",
        "How do you handle database migrations in a production PostgreSQL system?",
    ]),
    ("MongoDB", &[
        "When would you choose MongoDB over a relational database?",
        "How do you model relationships in MongoDB?",
    ]),
    ("SQLite", &[
        "What are the limitations of SQLite for production systems?",
        "How did you use SQLite in a mobile or embedded project?",
    ]),
    ("Firebase", &[
        "Describe how you have used Firestore for real-time data synchronisation.",
        "How do you handle Firebase security rules effectively?",
    ]),
    ("Redis", &[
        "What use cases make Redis the right choice over a relational DB?",
        "How would you use Redis for session management or caching?",
    ]),
    ("System Design", &[
        "How would you design a scalable REST API to serve millions of users?",
        "Describe the trade-offs between SQL and NoSQL databases at scale.",
    ]),
    ("Microservices", &[
        "How do microservices communicate with each other reliably?",
        "What challenges have you faced managing distributed data in microservices?",
    ]),
    ("REST API", &[
        "What principles make a REST API truly RESTful?",
        "How do you version and document a public REST API?",
    ]),
    ("GraphQL", &[
        "What problems does GraphQL solve that REST cannot?",
        "How do you prevent over-fetching and under-fetching in a GraphQL schema?",
    ]),
];
