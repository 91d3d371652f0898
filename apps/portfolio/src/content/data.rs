use super::{
    AdditionalInfoEntry, EducationEntry, ExperienceEntry, Profile, SkillEntry, SkillLevel,
};

pub const PROFILE: Profile = Profile {
    full_name: "Haripriya Tanuku Venkata",
    brand: "Meet Me",
    summary: "Experienced finance professional with over a decade of expertise in financial \
management, strategic planning, and corporate governance. Demonstrated success in budgeting, \
forecasting, financial modeling, and compliance controls (GAAP, IFRS). Adept at driving cost \
reduction initiatives, re-engineering business processes, and performing complex trend analysis \
to optimize financial performance. Skilled in cross-functional collaboration and long-term \
strategic decision-making to foster growth and profitability.",
    headshot_path: "/headshot.jpeg",
    linkedin_url: "https://www.linkedin.com/in/your-linkedin-profile",
};

pub const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Strategic Finance Lead",
        company: "Intel Corporation",
        duration: "Dec 2021 – Nov 2024",
        description: "
- Established a portfolio management process to optimize technology investments, minimize risks, and enhance decision-making.
- Collaborate with operations and finance teams to size investment opportunities, identify cost-saving measures, and develop long-term forecasts.
- Lead financial planning efforts, including OpEx forecasting, what-if analyses, and roadmap scenario modeling for manufacturing processes.
- Drive commodity forecasting for Intel's global Fab network, providing data-driven insights for cost structure improvements.
- Partner with cross-functional teams to execute strategic growth initiatives, focusing on affordability and manufacturing strategies.
    ",
    },
    ExperienceEntry {
        role: "Finance and Contract Manager",
        company: "VOA, Oregon",
        duration: "April 2018 – Dec 2021",
        description: "
- Managed the annual operating budget process and tracked performance against budgets and forecasts to identify trends and variances.
- Developed and implemented financial models to support strategic decision-making and improve operational efficiency.
- Negotiated contracts, resulting in streamlined processes and improved financial terms.
- Automated financial reporting, enhancing accuracy and reducing reporting time by 20%.
- Acted as a finance partner, providing actionable insights to stakeholders across the organization.
    ",
    },
    ExperienceEntry {
        role: "Planned Sabbatical",
        company: "Personal / Self",
        duration: "2016 – 2018",
        description: "
- Took a professional sabbatical to raise a family and remained engaged in continuous learning through courses at Wharton, NYU Stern, and ISB.
- Wrote grant proposals to support non-profits (Minds Matter), contributing to successful fundraising efforts.
    ",
    },
    ExperienceEntry {
        role: "Lead, Finance and Accounts",
        company: "Sony India Software Center",
        duration: "Dec 2012 – Sep 2015",
        description: "
- Managed financial reporting, budgeting, and cash flow projections for multiple business units.
- Conducted business reviews with senior management, including revenue forecasting, cost tracking, and trend analysis.
- Ensured SEZ compliance and reduced overall operating costs by 15% through effective budgeting and planning.
- Collaborated with accounting teams to close financial books by day 2 of each month, maintaining high data integrity.
    ",
    },
    ExperienceEntry {
        role: "Financial Controller",
        company: "KPIT Cummins Infosystems Ltd",
        duration: "Jan 2012 – Dec 2012",
        description: "
- Led financial activities, including capital budgeting, risk management, and vendor contract negotiations, ensuring projects stayed on time and within budget.
- Reduced semiconductor business unit costs by 15% through optimization and strategic planning.
- Partnered with senior management for revenue forecasting, variance analysis, and cost control initiatives.
    ",
    },
    ExperienceEntry {
        role: "Senior Financial Analyst, Corporate Finance & Forex Treasury",
        company: "Tech Mahindra Ltd",
        duration: "July 2007 – Jan 2012",
        description: "
- Developed KPIs and provided financial analysis across 200+ projects, leading to a 20% reduction in total project costs.
- Consolidated financial data from multiple sources to benchmark performance against competitors.
- Managed forex transactions, including hedging and fund transfers, with detailed MTM reporting.
- Collaborated with project managers to design reports improving project financial visibility and control.
    ",
    },
];

pub const SKILLS: &[SkillEntry] = &[
    SkillEntry {
        name: "Financial Reporting & Statements (GAAP, IFRS)",
        level: Some(SkillLevel::Intermediate),
    },
    SkillEntry {
        name: "Budgeting, Forecasting & Long-Range Planning",
        level: Some(SkillLevel::Expert),
    },
    SkillEntry {
        name: "Cost Management & ROI analysis",
        level: Some(SkillLevel::Expert),
    },
    SkillEntry {
        name: "Capital Budgeting & Corporate Restructuring",
        level: Some(SkillLevel::Expert),
    },
    SkillEntry {
        name: "Financial Modeling & Scenario Analysis",
        level: Some(SkillLevel::Expert),
    },
    SkillEntry {
        name: "Key Performance Metrics & Dashboard Reporting",
        level: Some(SkillLevel::Expert),
    },
    SkillEntry {
        name: "Contract Negotiation & Vendor Management",
        level: Some(SkillLevel::Intermediate),
    },
    SkillEntry {
        name: "Microsoft Office Suite (Advanced Excel, Power BI, Word, PowerPoint)",
        level: Some(SkillLevel::Expert),
    },
    SkillEntry {
        name: "SAP Finance, Hyperion, PeopleSoft, Sage Intacct, Oracle, SQL",
        level: Some(SkillLevel::Intermediate),
    },
];

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "M.B.A. in Finance & Systems",
        institution: "PUMBA (Department of Management Sciences, Pune)",
    },
    EducationEntry {
        degree: "B.E. in Production Engineering",
        institution: "Sinhgad College of Engineering, Pune",
    },
];

pub const ADDITIONAL_INFO: &[AdditionalInfoEntry] = &[
    AdditionalInfoEntry {
        title: "Power MBA",
        issuer: "The Power Business School",
    },
    AdditionalInfoEntry {
        title: "Generative AI and Data Analytics",
        issuer: "LinkedIn Learning",
    },
];
