//! Static page content.

use crate::scrollspy::anchor_id;
use crate::types::{Category, ChartData, Color, Series};

pub const SITE_TITLE: &str = "Cultura Organizacional";
pub const BRAND: &str = "ADM e Controle de Projetos";
pub const PRESENTATION_PDF: &str = "/cultura-organizacional.pdf";
pub const AUTHORS: [&str; 3] = ["Alan", "Guilherme", "Victor"];
pub const PROFESSOR: &str = "Alcebiades Lobo";
pub const COURSE: &str = "Administração e Controle de Projetos";
pub const PRESENTED_ON: &str = "19/05/2025";
pub const COPYRIGHT: &str = "© 2025 - Guilherme Martins Barradas - Intuitos acadêmicos";

pub const COLLABORATIVE_COLOR: Color = Color::rgb(0x10, 0xb9, 0x81);
pub const HIERARCHICAL_COLOR: Color = Color::rgb(0x64, 0x74, 0x8b);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavItem {
    /// Section id the link points at
    pub fn section_id(&self) -> &'static str {
        anchor_id(self.href)
    }
}

pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem { href: "#introducao", label: "Introdução" },
    NavItem { href: "#influencia", label: "Influência" },
    NavItem { href: "#lideranca", label: "Liderança" },
    NavItem { href: "#motivacao", label: "Motivação" },
    NavItem { href: "#riscos", label: "Riscos" },
    NavItem { href: "#estudos-caso", label: "Estudos de Caso" },
    NavItem { href: "#estrategias", label: "Estratégias" },
    NavItem { href: "#conclusao", label: "Conclusão" },
];

pub const INITIAL_SECTION: &str = "introducao";

/// Headline statistic animated by a counter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: f64,
    pub label: &'static str,
    pub suffix: &'static str,
    pub decimals: usize,
    pub source: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        value: 92.0,
        label: "Executivos que acreditam que cultura aumenta valor da empresa",
        suffix: "%",
        decimals: 0,
        source: "Deloitte, 2019",
    },
    Stat {
        value: 4.2,
        label: "Vezes mais chances de crescimento com cultura forte",
        suffix: "x",
        decimals: 1,
        source: "McKinsey, 2021",
    },
    Stat {
        value: 70.0,
        label: "Projetos que falham devido a fatores culturais",
        suffix: "%",
        decimals: 0,
        source: "PMI, 2022",
    },
    Stat {
        value: 33.0,
        label: "Aumento na produtividade com cultura engajada",
        suffix: "%",
        decimals: 0,
        source: "Gallup, 2023",
    },
];

pub const CHART_TITLE: &str = "Comparativo de Características Culturais";
pub const CHART_CAPTION: &str = "Fonte: MIT Sloan Management Review, 2022";

/// Collaborative vs. hierarchical culture across six traits
pub fn culture_chart() -> ChartData {
    let categories = [
        "Colaboração",
        "Inovação",
        "Adaptabilidade",
        "Comunicação",
        "Transparência",
        "Confiança",
    ]
    .into_iter()
    .map(Category::new)
    .collect();

    ChartData::new(
        categories,
        vec![
            Series::new(
                "Cultura Colaborativa",
                COLLABORATIVE_COLOR,
                vec![0.9, 0.8, 0.85, 0.75, 0.8, 0.9],
            ),
            Series::new(
                "Cultura Hierárquica",
                HIERARCHICAL_COLOR,
                vec![0.5, 0.4, 0.3, 0.6, 0.5, 0.7],
            ),
        ],
    )
    .with_caption(CHART_CAPTION)
}

/// Short titled paragraph used by cards and lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub title: &'static str,
    pub text: &'static str,
}

pub const HERO_BADGE: &str =
    "Trabalho Acadêmico • Tecnologia em Análise e Desenvolvimento de Sistemas";
pub const HERO_LEAD: &str = "O alicerce invisível que sustenta o comportamento coletivo e impacta diretamente a gestão de projetos";

pub const INTRO_PARAGRAPHS: [&str; 2] = [
    "A cultura organizacional é o alicerce invisível, mas essencial, que sustenta o comportamento coletivo de uma organização.",
    "Trata-se de um conjunto de valores, crenças, práticas, normas e símbolos que orientam as ações e decisões internas.",
];

pub const INTRO_QUOTE: Topic = Topic {
    title: "— Edgar Schein, \"Organizational Culture and Leadership\", 2017",
    text: "\"A cultura organizacional é para as empresas o que a personalidade é para os indivíduos: um conjunto oculto, mas unificador, de atributos que fornece significado, direção e mobilização.\"",
};

pub const PILLARS: [Topic; 3] = [
    Topic { title: "Valores", text: "Princípios fundamentais que guiam as decisões e comportamentos" },
    Topic { title: "Práticas", text: "Ações e rotinas que refletem e reforçam a cultura" },
    Topic { title: "Símbolos", text: "Representações visuais e comportamentais dos valores da organização" },
];

/// One of the two contrasted culture types
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CultureProfile {
    pub title: &'static str,
    pub text: &'static str,
    pub traits: [&'static str; 3],
    pub accent: Color,
}

pub const CULTURE_PROFILES: [CultureProfile; 2] = [
    CultureProfile {
        title: "Culturas Colaborativas",
        text: "Organizações com culturas colaborativas tendem a adotar metodologias mais flexíveis, como as abordagens ágeis, promovendo inovação e adaptabilidade. Segundo o BCG (2023), 88% dessas empresas superam seus concorrentes em crescimento de mercado.",
        traits: [
            "Comunicação aberta e frequente",
            "Tomada de decisão descentralizada",
            "Adaptação rápida a mudanças",
        ],
        accent: COLLABORATIVE_COLOR,
    },
    CultureProfile {
        title: "Culturas Hierárquicas",
        text: "Empresas com culturas mais hierárquicas frequentemente preferem metodologias tradicionais. Pesquisas do MIT Sloan (2022) mostram que estas organizações tomam decisões 60% mais lentamente, mas podem ter maior consistência em processos padronizados.",
        traits: [
            "Processos bem definidos e documentados",
            "Aprovações em múltiplos níveis",
            "Planejamento detalhado e antecipado",
        ],
        accent: HIERARCHICAL_COLOR,
    },
];

pub const LEADERSHIP_PARAGRAPHS: [&str; 2] = [
    "O gerente de projetos, nesse contexto, precisa ser mais do que um executor de cronogramas. Ele precisa ser um leitor atento da cultura.",
    "Sua habilidade em perceber padrões de comportamento, identificar resistências e adaptar estratégias conforme o ambiente pode ser o diferencial entre o sucesso e o fracasso. Segundo o PMI (2022), 70% dos projetos que falham são atribuídos a fatores relacionados à cultura organizacional.",
];

pub const COMPETENCIES: [Topic; 4] = [
    Topic { title: "Escuta ativa", text: "Capacidade de ouvir atentamente e compreender as nuances culturais" },
    Topic { title: "Empatia organizacional", text: "Compreensão profunda dos valores e motivações da equipe" },
    Topic { title: "Adaptabilidade", text: "Flexibilidade para ajustar abordagens conforme o contexto cultural" },
    Topic { title: "Comunicação contextual", text: "Habilidade de comunicar considerando aspectos culturais" },
];

pub const MOTIVATION_TEXT: &str = "Quando a cultura organizacional é sólida, transparente e bem compreendida, ela atua como uma força propulsora. De acordo com a Gallup (2023), organizações com culturas altamente engajadas apresentam 33% maior produtividade, pois os colaboradores sentem-se parte de algo maior e desenvolvem um senso de propósito.";

pub const MOTIVATION_FACTORS: [Topic; 3] = [
    Topic { title: "Propósito", text: "Conexão com objetivos maiores da organização" },
    Topic { title: "Pertencimento", text: "Sentimento de fazer parte de uma comunidade" },
    Topic { title: "Autonomia", text: "Liberdade para tomar decisões alinhadas aos valores" },
];

pub const MOTIVATION_QUOTE: Topic = Topic {
    title: "— Columbia University, \"The Impact of Corporate Culture on Employee Turnover\", 2020",
    text: "Empresas com culturas fortes têm 72% menor rotatividade de funcionários e demonstram maior capacidade de reter talentos essenciais para o sucesso de projetos.",
};

pub const RISK_PARAGRAPHS: [&str; 2] = [
    "Outro aspecto relevante é a influência da cultura na gestão de riscos. Em ambientes onde há abertura e confiança, os riscos são discutidos abertamente, com ações preventivas pensadas em equipe.",
    "Isso reduz o impacto de problemas futuros e fortalece a capacidade da organização de reagir rapidamente.",
];

pub const RISK_HIGHLIGHT: Topic = Topic {
    title: "Impacto Positivo",
    text: "Organizações com culturas abertas relatam 59% menos incidentes críticos em projetos",
};
pub const RISK_HIGHLIGHT_SOURCE: &str = "Fonte: Harvard Business Review, 2022";

pub const RISK_CULTURES: [Topic; 3] = [
    Topic { title: "Cultura de Abertura", text: "Problemas são discutidos sem medo de represálias ou julgamentos" },
    Topic { title: "Cultura de Aprendizado", text: "Erros são vistos como oportunidades valiosas de melhoria e crescimento" },
    Topic { title: "Cultura de Prevenção", text: "Antecipação de problemas é valorizada e ativamente incentivada" },
];

/// "Eficácia na mitigação de riscos" progress bar, percent
pub const RISK_MITIGATION_PERCENT: f64 = 78.0;
pub const RISK_MITIGATION_SOURCE: &str = "Fonte: PwC, Global Culture Survey, 2021";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub text: &'static str,
    pub source: &'static str,
    /// Whether the case illustrates a success or a failure
    pub succeeded: bool,
}

pub const CASE_STUDIES: [CaseStudy; 4] = [
    CaseStudy {
        title: "Google – Inovação como DNA",
        text: "A cultura adhocrática do Google transforma a gestão de projetos em um campo de experimentação. Com a política \"20% do tempo\", que permite que funcionários dediquem parte da jornada a projetos pessoais, nasceram iniciativas como Gmail e Google Maps. Aqui, o fracasso não é punido – é visto como passo necessário para inovação.",
        source: "Fonte: Harvard Business Review, \"How Google Works\", 2021",
        succeeded: true,
    },
    CaseStudy {
        title: "Toyota – Excelência com Kaizen",
        text: "Na Toyota, projetos não são apenas entregues – são continuamente aprimorados. A cultura que mistura hierarquia com melhoria contínua resultou em sistemas como o Toyota Production System, onde até o operário da linha tem voz para sugerir melhorias. O segredo? Padronização que não engessa a criatividade.",
        source: "Fonte: MIT Sloan Management Review, \"The Toyota Way\", 2020",
        succeeded: true,
    },
    CaseStudy {
        title: "NHS – O Custo do Desalinhamento",
        text: "O ambicioso projeto de prontuários eletrônicos do serviço de saúde britânico consumiu £10 bilhões antes de ser abandonado. O erro crucial? Ignorar que hospitais locais valorizavam autonomia acima de padronização. Um caso clássico onde a tecnologia era viável, mas a cultura não estava preparada.",
        source: "Fonte: British Journal of Healthcare Management, \"NHS Digital Transformation\", 2019",
        succeeded: false,
    },
    CaseStudy {
        title: "Embraer – Transformação Cultural",
        text: "A brasileira Embraer mostrou que até em setores tradicionais a cultura pode evoluir. Ao adotar gestão de projetos ágil em engenharia aeronáutica, provou que é possível manter rigor técnico enquanto incentiva inovação – desde que a mudança cultural seja gradual e bem liderada.",
        source: "Fonte: Project Management Journal, \"Agile in Aerospace\", 2022",
        succeeded: true,
    },
];

pub const CASE_STUDIES_SUMMARY: &str = "Estes casos provam que metodologias e cronogramas são importantes, mas é a cultura que determina se as melhores práticas vão virar rotina ou apenas PowerPoint esquecido. Grandes empresas não impõem modelos – cultivam ecossistemas onde projetos florescem naturalmente.";

pub const STRATEGY_INTRO: [&str; 2] = [
    "Alinhar a cultura organizacional à gestão de projetos é uma tarefa estratégica que requer sensibilidade, planejamento e ações estruturadas. Esse alinhamento é fundamental para garantir que os projetos não apenas alcancem seus objetivos técnicos e financeiros, mas também estejam em harmonia com os valores, comportamentos e expectativas da organização.",
    "Projetos que entram em choque com a cultura vigente frequentemente enfrentam resistência, atrasos e falhas de implementação. Por isso, a adoção de estratégias específicas que promovam esse alinhamento torna-se essencial para o sucesso organizacional.",
];

pub const STRATEGIES: [Topic; 6] = [
    Topic {
        title: "Diagnose da Cultura Organizacional",
        text: "Antes de iniciar qualquer projeto, é importante compreender profundamente a cultura da organização. Ferramentas como o modelo de Cameron & Quinn, entrevistas e questionários podem mapear valores predominantes e padrões de comportamento.",
    },
    Topic {
        title: "Capacitação da Liderança",
        text: "Líderes e gerentes de projeto devem estar preparados para atuar como \"agentes de integração cultural\", capazes de mediar as exigências técnicas dos projetos com os valores culturais da organização.",
    },
    Topic {
        title: "Comunicação Clara e Transparente",
        text: "Ao compartilhar informações relevantes sobre os objetivos, impactos e benefícios dos projetos, os gestores fortalecem a confiança entre as partes envolvidas e reduzem incertezas.",
    },
    Topic {
        title: "Engajamento dos Stakeholders",
        text: "Envolver os diferentes públicos afetados pelo projeto desde o início do planejamento é uma forma eficaz de aumentar o comprometimento e reduzir resistências.",
    },
    Topic {
        title: "Metodologias Compatíveis",
        text: "Metodologias ágeis podem ser mais bem-sucedidas em culturas flexíveis e inovadoras, enquanto modelos tradicionais podem se adequar melhor a organizações mais formais e estruturadas.",
    },
    Topic {
        title: "Reforço de Aprendizados Culturais",
        text: "Criar espaços de feedback, compartilhar boas práticas e reconhecer atitudes alinhadas à cultura organizacional contribui para consolidar comportamentos desejáveis.",
    },
];

pub const STRATEGY_SUMMARY: &str = "Em síntese, o alinhamento entre cultura organizacional e gestão de projetos não ocorre de forma automática, exigindo estratégias conscientes e ações coordenadas. Quando bem conduzido, esse processo não só potencializa os resultados dos projetos, como também fortalece a identidade organizacional e a capacidade da empresa de se adaptar e evoluir em um ambiente cada vez mais desafiador.";

pub const CONCLUSION_TITLE: &str = "O Papel Central da Cultura na Gestão de Projetos";

pub const CONCLUSION_PARAGRAPHS: [&str; 2] = [
    "Portanto, ao se analisar o impacto da cultura organizacional na gestão de projetos, percebe-se que não se trata apenas de um pano de fundo simbólico, mas de um elemento estruturante. Pesquisas da McKinsey (2021) demonstram que empresas com culturas fortes têm 4.2 vezes maior probabilidade de apresentar crescimento sustentável.",
    "Projetos bem-sucedidos não nascem apenas de cronogramas bem desenhados ou de ferramentas modernas, mas da capacidade da organização de articular pessoas em torno de um propósito comum — e isso é, essencialmente, uma manifestação cultural que, segundo a Deloitte (2019), é reconhecida por 92% dos executivos como fator crítico para o valor da empresa.",
];

/// Bibliography entry: bold author/year lead plus the rest of the citation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub lead: &'static str,
    pub citation: &'static str,
}

pub const REFERENCES: [Reference; 17] = [
    Reference { lead: "Deloitte. (2019).", citation: "Core beliefs and culture: Chairman's survey findings. Deloitte Insights." },
    Reference { lead: "McKinsey & Company. (2021).", citation: "Culture for a digital age. McKinsey Quarterly." },
    Reference { lead: "Project Management Institute. (2022).", citation: "Pulse of the Profession: The Power of Culture. PMI Global Survey." },
    Reference { lead: "Gallup. (2023).", citation: "State of the Global Workplace: Employee Engagement Insights for Business Leaders Worldwide." },
    Reference { lead: "Harvard Business Review. (2022).", citation: "The Leader's Guide to Corporate Culture. Harvard Business Publishing." },
    Reference { lead: "PwC. (2021).", citation: "Global Culture Survey: The link between culture and competitive advantage. PricewaterhouseCoopers." },
    Reference { lead: "Columbia University. (2020).", citation: "The Impact of Corporate Culture on Employee Turnover. Columbia Business School Research Paper." },
    Reference { lead: "Boston Consulting Group. (2023).", citation: "The Most Innovative Companies: Innovation's New World Order. BCG Henderson Institute." },
    Reference { lead: "MIT Sloan Management Review. (2022).", citation: "The Culture Factor: How Culture Shapes the Digital Transformation. MIT Press." },
    Reference { lead: "Schein, E. H. (2017).", citation: "Organizational Culture and Leadership (5th ed.). Jossey-Bass." },
    Reference { lead: "CAMERON, Kim S.; QUINN, Robert E. (2011).", citation: "Diagnosing and Changing Organizational Culture: Based on the Competing Values Framework. 3. ed. San Francisco: Jossey-Bass." },
    Reference { lead: "CHIAVENATO, Idalberto. (2014).", citation: "Introdução à Teoria Geral da Administração. 9. ed. Rio de Janeiro: Elsevier." },
    Reference { lead: "KERZNER, Harold. (2017).", citation: "Gestão de Projetos: As melhores práticas. 3. ed. Porto Alegre: Bookman." },
    Reference { lead: "MAXIMIANO, Antônio César Amaru. (2021).", citation: "Teoria Geral da Administração: Da revolução urbana à revolução digital. 9. ed. São Paulo: Atlas." },
    Reference { lead: "PMI – Project Management Institute. (2021).", citation: "Um Guia do Conhecimento em Gerenciamento de Projetos (Guia PMBOK®). 7. ed. Philadelphia: PMI." },
    Reference { lead: "VALERIANO, Dalton Lopes. (1998).", citation: "Gerência em Projetos: Pesquisa, desenvolvimento e engenharia. 2. ed. São Paulo: Makron Books." },
    Reference { lead: "VERGARA, Sylvia Constant. (2010).", citation: "Gestão de Pessoas. 3. ed. São Paulo: Atlas." },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_culture_chart_is_valid() {
        let chart = culture_chart();
        assert!(chart.validate().is_ok());
        assert_eq!(chart.axis_count(), 6);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.caption.as_deref(), Some(CHART_CAPTION));
    }

    #[test]
    fn test_nav_targets_unique() {
        let mut ids: Vec<&str> = NAV_ITEMS.iter().map(NavItem::section_id).collect();
        assert_eq!(ids[0], INITIAL_SECTION);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_section_id_strips_anchor() {
        assert_eq!(NAV_ITEMS[5].section_id(), "estudos-caso");
        let bare = NavItem { href: "conclusao", label: "Conclusão" };
        assert_eq!(bare.section_id(), "conclusao");
    }

    #[test]
    fn test_stat_decimals() {
        assert_eq!(STATS[1].decimals, 1);
        assert!(STATS.iter().all(|s| s.value > 0.0));
    }
}
