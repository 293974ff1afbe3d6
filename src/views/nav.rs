use crate::models::users::entities::Role;

/// One entry of the side navigation. `roles: None` means visible to
/// everyone.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: &'static str,
    pub roles: Option<&'static [Role]>,
}

/// A dashboard shortcut, always role-restricted.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: &'static str,
    pub roles: &'static [Role],
}

/// The full navigation catalog; filtering happens per role.
pub fn nav_catalog() -> &'static [NavItem] {
    const ITEMS: &[NavItem] = &[
        NavItem { label: "Dashboard", icon: "dashboard", route: "/dashboard", roles: None },
        NavItem { label: "Escolas", icon: "business", route: "/escolas", roles: Some(&[Role::Admin]) },
        NavItem { label: "Turmas", icon: "groups", route: "/turmas", roles: Some(&[Role::Admin, Role::Coordenador, Role::Professor]) },
        NavItem { label: "Alunos", icon: "school", route: "/alunos", roles: Some(&[Role::Admin, Role::Coordenador, Role::Professor]) },
        NavItem { label: "Professores", icon: "person", route: "/professores", roles: Some(&[Role::Admin, Role::Coordenador]) },
        NavItem { label: "Disciplinas", icon: "menu_book", route: "/disciplinas", roles: Some(&[Role::Admin, Role::Coordenador]) },
        NavItem { label: "Coordenadores", icon: "supervisor_account", route: "/coordenadores", roles: Some(&[Role::Admin]) },
        NavItem { label: "Períodos Letivos", icon: "calendar_month", route: "/periodos", roles: Some(&[Role::Admin, Role::Coordenador]) },
        NavItem { label: "Vínculos", icon: "link", route: "/vinculos", roles: Some(&[Role::Admin, Role::Coordenador]) },
        NavItem { label: "Avaliações", icon: "assignment", route: "/avaliacoes", roles: Some(&[Role::Admin, Role::Coordenador, Role::Professor]) },
        NavItem { label: "Notas", icon: "grade", route: "/notas", roles: Some(&[Role::Admin, Role::Coordenador, Role::Professor]) },
        NavItem { label: "Regras", icon: "rule", route: "/regras", roles: Some(&[Role::Admin, Role::Coordenador]) },
        NavItem { label: "Meu Boletim", icon: "description", route: "/relatorios/boletim", roles: Some(&[Role::Aluno]) },
        NavItem { label: "Boletins", icon: "description", route: "/relatorios/boletim", roles: Some(&[Role::Admin, Role::Coordenador, Role::Professor]) },
        NavItem { label: "Relatório Turma", icon: "assessment", route: "/relatorios/turma", roles: Some(&[Role::Admin, Role::Coordenador, Role::Professor]) },
        NavItem { label: "Estatísticas Escola", icon: "bar_chart", route: "/relatorios/escola", roles: Some(&[Role::Admin, Role::Coordenador]) },
    ];
    ITEMS
}

pub fn quick_action_catalog() -> &'static [QuickAction] {
    const ACTIONS: &[QuickAction] = &[
        QuickAction { label: "Nova Escola", icon: "add_business", route: "/escolas", roles: &[Role::Admin] },
        QuickAction { label: "Novo Aluno", icon: "person_add", route: "/alunos", roles: &[Role::Admin, Role::Coordenador] },
        QuickAction { label: "Nova Turma", icon: "group_add", route: "/turmas", roles: &[Role::Admin, Role::Coordenador] },
        QuickAction { label: "Novo Professor", icon: "person_add", route: "/professores", roles: &[Role::Admin, Role::Coordenador] },
        QuickAction { label: "Nova Avaliação", icon: "assignment_add", route: "/avaliacoes", roles: &[Role::Professor] },
        QuickAction { label: "Lançar Notas", icon: "edit_note", route: "/notas", roles: &[Role::Professor] },
        QuickAction { label: "Vincular Professor", icon: "link", route: "/vinculos", roles: &[Role::Admin, Role::Coordenador] },
        QuickAction { label: "Regras Aprovação", icon: "rule", route: "/regras", roles: &[Role::Admin, Role::Coordenador] },
        QuickAction { label: "Relatórios", icon: "assessment", route: "/relatorios", roles: &[Role::Admin, Role::Coordenador, Role::Professor] },
    ];
    ACTIONS
}

/// Order-preserving role filter: unrestricted items are visible to every
/// role, restricted ones only when the role is listed.
pub fn visible_nav_items<'a>(role: Role, items: &'a [NavItem]) -> Vec<&'a NavItem> {
    items
        .iter()
        .filter(|item| match item.roles {
            None => true,
            Some(roles) => roles.contains(&role),
        })
        .collect()
}

pub fn visible_quick_actions<'a>(role: Role, actions: &'a [QuickAction]) -> Vec<&'a QuickAction> {
    actions
        .iter()
        .filter(|action| action.roles.contains(&role))
        .collect()
}
