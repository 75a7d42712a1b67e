//! Portuguese translations / Tradu\u{00E7}\u{00F5}es em portugu\u{00EA}s

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Calculadora de Or\u{00E7}amentos Pladur (Teto)".into());
    t.insert("division.default_name".into(), "Divis\u{00E3}o {n}".into());
    t.insert("report.divisions".into(), "Divis\u{00F5}es".into());

    // Division table columns (also the exported headers)
    t.insert("column.name".into(), "Nome".into());
    t.insert("column.width".into(), "Largura (m)".into());
    t.insert("column.length".into(), "Comprimento (m)".into());
    t.insert("column.area".into(), "\u{00C1}rea (m\u{00B2})".into());
    t.insert("column.boards".into(), "Placas (un)".into());
    t.insert("column.track".into(), "Calha (m)".into());
    t.insert("column.profiles".into(), "Perfis {length}m (un)".into());
    t.insert("column.rods".into(), "Var\u{00F5}es (un)".into());
    t.insert("column.pivots".into(), "Pivots (un)".into());
    t.insert("column.material_cost".into(), "Custo Materiais ({currency})".into());

    // Totals
    t.insert("totals.title".into(), "Totais Gerais".into());
    t.insert("totals.area".into(), "\u{00C1}rea total (m\u{00B2})".into());
    t.insert("totals.boards".into(), "Placas (un)".into());
    t.insert("totals.track".into(), "Calha (m)".into());
    t.insert("totals.profiles".into(), "Perfis (un)".into());
    t.insert("totals.rods".into(), "Var\u{00F5}es (un)".into());
    t.insert("totals.pivots".into(), "Pivots (un)".into());
    t.insert("totals.materials".into(), "Materiais".into());
    t.insert("totals.labor".into(), "M\u{00E3}o de obra".into());
    t.insert("totals.subtotal".into(), "Subtotal".into());
    t.insert("totals.margin".into(), "Margem".into());
    t.insert("totals.final_price".into(), "Pre\u{00E7}o Final Cliente".into());

    // Parameters
    t.insert("params.title".into(), "Par\u{00E2}metros".into());
    t.insert("param.board".into(), "Placa (por unidade)".into());
    t.insert("param.track".into(), "Calha perimetral (por metro)".into());
    t.insert("param.profile".into(), "Perfil/Montante (por unidade)".into());
    t.insert("param.rod".into(), "Var\u{00E3}o roscado (por unidade)".into());
    t.insert("param.pivot".into(), "Pivot/Suspens\u{00E3}o (por unidade)".into());
    t.insert("param.labor".into(), "M\u{00E3}o de obra (por m\u{00B2})".into());
    t.insert("param.margin".into(), "Margem de lucro (%)".into());
    t.insert("param.profile-spacing".into(), "Espa\u{00E7}amento entre perfis (m)".into());
    t.insert("param.rod-spacing".into(), "Espa\u{00E7}amento dos var\u{00F5}es (m)".into());
    t.insert("param.board-width".into(), "Largura da placa (m)".into());
    t.insert("param.board-length".into(), "Comprimento da placa (m)".into());
    t.insert("param.profile-length".into(), "Comprimento do perfil (m)".into());
    t.insert("param.language".into(), "Idioma".into());
    t.insert("param.currency".into(), "Moeda".into());
    t.insert("param.currency-symbol".into(), "S\u{00ED}mbolo da moeda".into());
    t.insert("param.file-name".into(), "Ficheiro de exporta\u{00E7}\u{00E3}o".into());
    t.insert("param.delimiter".into(), "Separador de exporta\u{00E7}\u{00E3}o".into());

    // Interactive session
    t.insert("shell.welcome".into(), "Escreva 'help' para ver os comandos, 'quit' para sair.".into());
    t.insert("shell.prompt".into(), "pladur> ".into());
    t.insert("shell.added".into(), "Adicionada: {name} ({width} m \u{00D7} {length} m)".into());
    t.insert("shell.removed".into(), "Removida: {name}".into());
    t.insert("shell.cleared".into(), "Todas as divis\u{00F5}es foram removidas".into());
    t.insert("shell.empty".into(), "Ainda n\u{00E3}o h\u{00E1} divis\u{00F5}es. Use 'add <largura> <comprimento> [nome]'.".into());
    t.insert("shell.exported".into(), "Exportadas {count} divis\u{00F5}es para {path}".into());
    t.insert("shell.param_set".into(), "{key} = {value}".into());
    t.insert("shell.error".into(), "Erro: {message}".into());
    t.insert("shell.goodbye".into(), "At\u{00E9} logo.".into());
    t.insert(
        "shell.help".into(),
        "Comandos:\n\
         \x20 add <largura> <comprimento> [nome]  adicionar divis\u{00E3}o\n\
         \x20 list                                mostrar divis\u{00F5}es\n\
         \x20 totals                              mostrar divis\u{00F5}es e totais\n\
         \x20 remove <n>                          remover a divis\u{00E3}o n\n\
         \x20 clear                               limpar todas as divis\u{00F5}es\n\
         \x20 set <chave> <valor>                 alterar um par\u{00E2}metro\n\
         \x20 params                              mostrar par\u{00E2}metros\n\
         \x20 export [ficheiro]                   exportar divis\u{00F5}es (CSV)\n\
         \x20 json [ficheiro]                     mostrar ou gravar o relat\u{00F3}rio JSON\n\
         \x20 help                                mostrar esta ajuda\n\
         \x20 quit                                sair"
            .into(),
    );

    t
}
